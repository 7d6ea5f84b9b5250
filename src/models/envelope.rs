//! 后端统一响应信封
//!
//! 网关后面的大部分服务（statistics、bank、upload、auth）把负载包在
//! `{ code, message, data, timestamp, success }` 的信封里下发，
//! 而 content 服务直接返回裸 DTO。信封字段全部宽容解析，
//! 缺字段不会导致反序列化失败，形状判定交给 normalizer 完成。

use serde::Deserialize;
use serde_json::Value;

use crate::models::error_code;

/// 统一响应信封
///
/// `data` 保持原始 JSON 不动，具体负载类型的解码由 normalizer
/// 在确认信封形状之后再做。
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope {
    /// 业务状态码，成功时为 200
    #[serde(default)]
    pub code: Option<i64>,
    /// 提示消息
    #[serde(default)]
    pub message: Option<String>,
    /// 实际负载，字段缺失时为 `Value::Null`
    #[serde(default)]
    pub data: Value,
    /// 响应时间戳，网关下发数字，个别服务下发字符串
    #[serde(default)]
    pub timestamp: Option<Value>,
    /// 业务是否成功
    #[serde(default)]
    pub success: Option<bool>,
    /// 链路追踪 ID
    #[serde(default)]
    pub trace_id: Option<String>,
    /// 详细错误信息，一般只在开发环境出现
    #[serde(default)]
    pub detail_message: Option<String>,
}

impl ApiEnvelope {
    /// 信封声明成功且携带非空负载
    pub fn is_success_with_data(&self) -> bool {
        self.success == Some(true) && !self.data.is_null()
    }

    /// 取展示用的提示文案
    ///
    /// 网关偶尔会吞掉 message 只留 code，这时按错误码表还原标准文案。
    /// code 为 200 时不回退，成功码不该变成错误提示。
    pub fn display_message(&self) -> Option<String> {
        match self.message.as_deref().filter(|m| !m.is_empty()) {
            Some(m) => Some(m.to_string()),
            None => self
                .code
                .filter(|&c| c != error_code::SUCCESS_CODE)
                .and_then(error_code::message_for)
                .map(str::to_string),
        }
    }
}
