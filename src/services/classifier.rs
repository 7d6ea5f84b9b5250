//! 错误分类器
//!
//! 把 API 错误归入四类展示策略，并给出可以直接展示的中文文案。
//! 判定顺序固定：先看 HTTP 状态码，再看网络可达性，最后兜底。
//! 顺序不能换，404 响应体里哪怕带着 "Network Error" 字样也算 404。

use crate::error::{ApiError, ClassifiedError, ErrorCategory};

/// 目标接口不存在时的提示
pub const MSG_NOT_FOUND: &str = "统计服务不可用（404）";
/// 服务器 500 时的提示
pub const MSG_SERVER_ERROR: &str = "服务器内部错误";
/// 网络不可达时的提示
pub const MSG_NETWORK_UNREACHABLE: &str = "无法连接到服务器";
/// 没有更具体信息时的兜底提示
pub const MSG_FALLBACK: &str = "获取统计数据失败";

/// 对 API 错误分类并生成展示文案
///
/// # 参数
/// - `error`: 请求链路抛出的错误
///
/// # 返回
/// 返回分类结果，`message` 可直接展示给用户
pub fn classify(error: &ApiError) -> ClassifiedError {
    if let Some(status) = error.status() {
        if status == 404 {
            return ClassifiedError::new(ErrorCategory::NotFound, MSG_NOT_FOUND);
        }
        if status == 500 {
            return ClassifiedError::new(ErrorCategory::ServerError, MSG_SERVER_ERROR);
        }
    }

    if error.to_string().contains("Network Error") || error.is_connect_refused() {
        return ClassifiedError::new(
            ErrorCategory::NetworkUnreachable,
            MSG_NETWORK_UNREACHABLE,
        );
    }

    ClassifiedError::new(ErrorCategory::Unknown, unknown_message(error))
}

/// 兜底分支的文案：优先透出错误自带的提示
fn unknown_message(error: &ApiError) -> String {
    match error {
        // 信封里带 message 就透传，空串和缺失都走兜底
        ApiError::Normalize { detail, .. } => detail
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(MSG_FALLBACK)
            .to_string(),
        ApiError::Transport { message, .. } => {
            if message.is_empty() {
                MSG_FALLBACK.to_string()
            } else {
                message.clone()
            }
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http_error(status: u16) -> ApiError {
        ApiError::Http {
            endpoint: "/statistics/overview".to_string(),
            status,
            body: String::new(),
        }
    }

    fn transport_error(message: &str, connect_refused: bool) -> ApiError {
        ApiError::Transport {
            endpoint: "/statistics/overview".to_string(),
            message: message.to_string(),
            connect_refused,
            source: None,
        }
    }

    #[test]
    fn test_404_maps_to_not_found() {
        let classified = classify(&http_error(404));
        assert_eq!(classified.category, ErrorCategory::NotFound);
        assert_eq!(classified.message, "统计服务不可用（404）");
    }

    #[test]
    fn test_500_maps_to_server_error() {
        let classified = classify(&http_error(500));
        assert_eq!(classified.category, ErrorCategory::ServerError);
        assert_eq!(classified.message, "服务器内部错误");
    }

    #[test]
    fn test_network_error_substring_maps_to_unreachable() {
        let classified = classify(&transport_error("Network Error: timeout", false));
        assert_eq!(classified.category, ErrorCategory::NetworkUnreachable);
        assert_eq!(classified.message, "无法连接到服务器");
    }

    #[test]
    fn test_connect_refused_maps_to_unreachable() {
        let classified = classify(&transport_error("connection refused", true));
        assert_eq!(classified.category, ErrorCategory::NetworkUnreachable);
        assert_eq!(classified.message, "无法连接到服务器");
    }

    #[test]
    fn test_status_wins_over_network_text() {
        // 404 响应体里带 "Network Error" 字样也按 404 处理
        let err = ApiError::Http {
            endpoint: "/statistics/overview".to_string(),
            status: 404,
            body: "Network Error".to_string(),
        };
        assert_eq!(classify(&err).category, ErrorCategory::NotFound);
    }

    #[test]
    fn test_other_status_is_unknown() {
        let classified = classify(&http_error(418));
        assert_eq!(classified.category, ErrorCategory::Unknown);
        assert!(classified.message.contains("418"));
    }

    #[test]
    fn test_timeout_is_unknown_with_own_message() {
        let classified = classify(&transport_error("operation timed out", false));
        assert_eq!(classified.category, ErrorCategory::Unknown);
        assert_eq!(classified.message, "operation timed out");
    }

    #[test]
    fn test_normalize_detail_surfaces_to_user() {
        let err = ApiError::normalize("无法识别的响应形状", Some("统计数据聚合失败".to_string()));
        let classified = classify(&err);
        assert_eq!(classified.category, ErrorCategory::Unknown);
        assert_eq!(classified.message, "统计数据聚合失败");
    }

    #[test]
    fn test_normalize_without_detail_uses_fallback() {
        let err = ApiError::normalize("无法识别的响应形状", None);
        assert_eq!(classify(&err).message, "获取统计数据失败");
    }

    #[test]
    fn test_normalize_empty_detail_uses_fallback() {
        let err = ApiError::normalize("无法识别的响应形状", Some(String::new()));
        assert_eq!(classify(&err).message, "获取统计数据失败");
    }
}
