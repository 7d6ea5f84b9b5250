//! 请求观察钩子
//!
//! 钩子只能观察请求生命周期，拿到的都是只读引用，不能改写请求
//! 或响应，也不能吞掉错误。认证跳转之类的逻辑明确不放在这一层。

use reqwest::{Method, StatusCode};
use tracing::{debug, warn};

/// 请求生命周期观察钩子
///
/// 所有方法都有空默认实现，实现方只挑需要的事件。
pub trait RequestHook: Send + Sync {
    /// 请求即将发出
    fn on_request(&self, _method: &Method, _url: &str) {}

    /// 收到响应，此时状态行已知、响应体还未读取
    fn on_response(&self, _method: &Method, _url: &str, _status: StatusCode) {}

    /// 传输失败，请求没有得到 HTTP 响应
    fn on_transport_error(&self, _method: &Method, _url: &str, _error: &reqwest::Error) {}
}

/// 内置日志钩子，把请求生命周期写进 tracing
pub struct LoggingHook;

impl RequestHook for LoggingHook {
    fn on_request(&self, method: &Method, url: &str) {
        debug!("📤 {} {}", method, url);
    }

    fn on_response(&self, method: &Method, url: &str, status: StatusCode) {
        if status.is_success() {
            debug!("📥 {} {} -> {}", method, url, status.as_u16());
        } else {
            warn!("⚠️ {} {} -> {}", method, url, status.as_u16());
        }
    }

    fn on_transport_error(&self, method: &Method, url: &str, error: &reqwest::Error) {
        warn!("❌ {} {} 传输失败: {}", method, url, error);
    }
}
