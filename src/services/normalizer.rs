//! 响应负载归一化
//!
//! 网关后面的服务返回两种形状：大部分服务走统一信封
//! `{ code, message, data, success }`，content 服务直接返回裸 DTO。
//! 这里把两种形状统一成目标类型，判定规则固定：
//!
//! 1. 响应体能按信封解析且 `success == true`、`data` 非空，确认走
//!    信封路径，`data` 解码失败直接报错，不再回退尝试其他形状；
//! 2. 否则把整个响应体当裸 DTO 解码；
//! 3. 都不行则报 `Normalize` 错误，如果响应体形状像信封，
//!    把信封里的 `message`（为空时按错误码表还原）作为 detail 透传出去。
//!
//! 注意第 1 步只认 `success` 标志，不看 `code` 字段。双层信封
//! （data 里又嵌一个信封）会在负载解码这一步直接报错，属于
//! 服务端契约破坏，这里选择报错而不是静默拆两层。

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::models::ApiEnvelope;

/// 把响应体归一化成目标类型
///
/// # 参数
/// - `body`: 已解析的 JSON 响应体
///
/// # 返回
/// 返回解码后的目标类型，形状不符合约定时返回 `Normalize` 错误
pub fn normalize<T: DeserializeOwned>(body: Value) -> ApiResult<T> {
    let mut envelope_message: Option<String> = None;

    if let Ok(envelope) = serde_json::from_value::<ApiEnvelope>(body.clone()) {
        if envelope.is_success_with_data() {
            debug!("🔍 响应识别为统一信封, code={:?}", envelope.code);
            let message = envelope.display_message();
            return serde_json::from_value::<T>(envelope.data).map_err(|e| {
                ApiError::normalize(format!("信封负载解码失败: {}", e), message)
            });
        }
        // 形状像信封但不是成功态，先记下提示文案再尝试裸 DTO
        envelope_message = envelope.display_message();
    }

    match serde_json::from_value::<T>(body) {
        Ok(value) => {
            debug!("🔍 响应识别为裸 DTO");
            Ok(value)
        }
        Err(e) => Err(ApiError::normalize(
            format!("无法识别的响应形状: {}", e),
            envelope_message,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Question, StatisticsOverview};
    use serde_json::json;

    fn overview_body() -> Value {
        json!({
            "bankTotal": 5,
            "questionTotal": 100,
            "byType": {
                "single": { "count": 60, "completedCount": 30, "correctCount": 20 }
            }
        })
    }

    #[test]
    fn test_envelope_with_data_unwraps_payload() {
        let body = json!({
            "code": 200,
            "message": "操作成功",
            "data": overview_body(),
            "timestamp": 1718000000000u64,
            "success": true
        });

        let overview: StatisticsOverview = normalize(body).unwrap();
        assert_eq!(overview.bank_total, 5);
        assert_eq!(overview.question_total, 100);
        assert_eq!(overview.by_type["single"].count, Some(60));
    }

    #[test]
    fn test_bare_payload_passes_through() {
        let overview: StatisticsOverview = normalize(overview_body()).unwrap();
        assert_eq!(overview.bank_total, 5);
    }

    #[test]
    fn test_bare_array_passes_through() {
        let body = json!([{
            "id": 1,
            "content": "1 + 1 = ?",
            "type": "single",
            "options": [{ "label": "A", "text": "2" }],
            "correctAnswer": "A"
        }]);

        let questions: Vec<Question> = normalize(body).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].id, 1);
    }

    #[test]
    fn test_failure_envelope_carries_message_as_detail() {
        let body = json!({
            "code": 50000,
            "message": "统计数据聚合失败",
            "data": null,
            "success": false
        });

        let err = normalize::<StatisticsOverview>(body).unwrap_err();
        assert!(err.to_string().contains("统计数据聚合失败"));
        match err {
            ApiError::Normalize { detail, .. } => {
                assert_eq!(detail.as_deref(), Some("统计数据聚合失败"));
            }
            other => panic!("期望 Normalize 错误, 实际 {:?}", other),
        }
    }

    #[test]
    fn test_blank_message_restored_from_code_table() {
        // 网关吞掉 message 只留 code 的场景
        let body = json!({
            "code": 50100,
            "message": null,
            "data": null,
            "success": false
        });

        let err = normalize::<StatisticsOverview>(body).unwrap_err();
        match err {
            ApiError::Normalize { detail, .. } => {
                assert_eq!(detail.as_deref(), Some("数据库操作失败"));
            }
            other => panic!("期望 Normalize 错误, 实际 {:?}", other),
        }
    }

    #[test]
    fn test_success_envelope_commits_no_fallthrough() {
        // success 信封一旦确认就不再回退，负载对不上直接报错
        let body = json!({
            "code": 200,
            "message": "操作成功",
            "data": { "foo": 1 },
            "success": true
        });

        let err = normalize::<StatisticsOverview>(body).unwrap_err();
        assert!(matches!(err, ApiError::Normalize { .. }));
    }

    #[test]
    fn test_double_wrapped_envelope_fails_loudly() {
        // 服务端契约破坏：data 里又嵌了一层信封，报错而不是拆两层
        let body = json!({
            "code": 200,
            "message": "操作成功",
            "data": {
                "code": 200,
                "message": "操作成功",
                "data": overview_body(),
                "success": true
            },
            "success": true
        });

        let err = normalize::<StatisticsOverview>(body).unwrap_err();
        assert!(matches!(err, ApiError::Normalize { .. }));
    }

    #[test]
    fn test_envelope_without_success_flag_fails_with_message() {
        // 老接口形状：有 code 和 data 但没有 success 标志
        let body = json!({
            "code": 200,
            "message": "ok",
            "data": overview_body()
        });

        let err = normalize::<StatisticsOverview>(body).unwrap_err();
        match err {
            ApiError::Normalize { detail, .. } => {
                assert_eq!(detail.as_deref(), Some("ok"));
            }
            other => panic!("期望 Normalize 错误, 实际 {:?}", other),
        }
    }

    #[test]
    fn test_success_envelope_with_null_data_fails() {
        let body = json!({
            "code": 200,
            "message": "没有数据",
            "data": null,
            "success": true
        });

        let err = normalize::<StatisticsOverview>(body).unwrap_err();
        match err {
            ApiError::Normalize { detail, .. } => {
                assert_eq!(detail.as_deref(), Some("没有数据"));
            }
            other => panic!("期望 Normalize 错误, 实际 {:?}", other),
        }
    }

    #[test]
    fn test_unrecognized_shape_without_envelope_has_no_detail() {
        let body = json!(["不是题目", 42]);

        let err = normalize::<StatisticsOverview>(body).unwrap_err();
        match err {
            ApiError::Normalize { detail, .. } => assert_eq!(detail, None),
            other => panic!("期望 Normalize 错误, 实际 {:?}", other),
        }
    }

    #[test]
    fn test_same_body_same_outcome() {
        let body = overview_body();
        let first: StatisticsOverview = normalize(body.clone()).unwrap();
        let second: StatisticsOverview = normalize(body).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_envelope_decode_for_envelope_target() {
        // 目标类型本身就是信封时走裸 DTO 路径也能解出来
        let body = json!({
            "code": 40004,
            "message": "资源不存在",
            "data": null,
            "success": false
        });

        let envelope: ApiEnvelope = normalize(body).unwrap();
        assert_eq!(envelope.code, Some(40004));
        assert_eq!(envelope.success, Some(false));
    }
}
