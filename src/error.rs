//! 错误类型定义
//!
//! 请求生命周期的错误分三段：请求没发出去或没收到响应是 `Transport`，
//! 收到了非 2xx 响应是 `Http`，2xx 但响应体不符合约定是 `Normalize`。
//! 三者都不在这一层做用户文案，分类和本地化见 `services::classifier`。

use std::fmt;

use thiserror::Error;

/// API 调用错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 请求未到达服务器或未收到响应
    #[error("请求失败 ({endpoint}): {message}")]
    Transport {
        endpoint: String,
        /// 底层传输错误的描述文本
        message: String,
        /// 连接被拒绝（目标服务未启动或端口不通）
        connect_refused: bool,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// 服务器返回了非 2xx 状态码
    #[error("HTTP {status} ({endpoint})")]
    Http {
        endpoint: String,
        status: u16,
        /// 原始响应体，仅供日志排查
        body: String,
    },

    /// 2xx 响应但形状既不是信封也不是期望的裸 DTO
    #[error("响应格式不符合约定: {reason}{}", detail_suffix(.detail))]
    Normalize {
        reason: String,
        /// 信封里携带的业务提示，分类时透传给用户
        detail: Option<String>,
    },
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail.as_deref() {
        Some(d) if !d.is_empty() => format!("（{}）", d),
        _ => String::new(),
    }
}

impl ApiError {
    /// 从 reqwest 传输错误构造
    pub fn transport(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        ApiError::Transport {
            endpoint: endpoint.into(),
            message: source.to_string(),
            connect_refused: source.is_connect(),
            source: Some(source),
        }
    }

    /// 构造响应形状错误
    pub fn normalize(reason: impl Into<String>, detail: Option<String>) -> Self {
        ApiError::Normalize {
            reason: reason.into(),
            detail,
        }
    }

    /// HTTP 状态码，仅 `Http` 变体返回 Some
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 是否为连接被拒绝的传输错误
    pub fn is_connect_refused(&self) -> bool {
        matches!(
            self,
            ApiError::Transport {
                connect_refused: true,
                ..
            }
        )
    }
}

// ========== 错误分类 ==========

/// 错误分类，对应展示层的四种处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 目标资源不存在（404）
    NotFound,
    /// 服务器内部错误（500）
    ServerError,
    /// 网络不可达或连接被拒绝
    NetworkUnreachable,
    /// 未识别的其他错误
    Unknown,
}

/// 分类后的错误，`message` 是可以直接展示的本地化文案
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedError {
    pub category: ErrorCategory,
    pub message: String,
}

impl ClassifiedError {
    pub fn new(category: ErrorCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }
}

impl fmt::Display for ClassifiedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

// ========== Result 类型别名 ==========

/// API 调用结果类型
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_display_includes_detail() {
        let with_detail =
            ApiError::normalize("无法识别的响应形状", Some("题库不存在".to_string()));
        assert_eq!(
            with_detail.to_string(),
            "响应格式不符合约定: 无法识别的响应形状（题库不存在）"
        );

        let without_detail = ApiError::normalize("无法识别的响应形状", None);
        assert_eq!(
            without_detail.to_string(),
            "响应格式不符合约定: 无法识别的响应形状"
        );
    }

    #[test]
    fn test_status_only_on_http_variant() {
        let http = ApiError::Http {
            endpoint: "/statistics/overview".to_string(),
            status: 404,
            body: String::new(),
        };
        assert_eq!(http.status(), Some(404));
        assert_eq!(ApiError::normalize("x", None).status(), None);
    }
}
