//! 题库服务接口

use tracing::{debug, info};

use crate::client::HttpClient;
use crate::error::{ApiError, ApiResult};
use crate::models::{ApiEnvelope, MergeBankRequest, QuestionBank};
use crate::services::normalizer::normalize;

/// 获取全部题库
pub async fn fetch_banks(client: &HttpClient) -> ApiResult<Vec<QuestionBank>> {
    debug!("📚 获取题库列表");
    let body = client.get_json("/bank").await?;
    normalize(body)
}

/// 题库服务健康检查
pub async fn health_check(client: &HttpClient) -> ApiResult<String> {
    let body = client.get_json("/bank/health").await?;
    normalize(body)
}

/// 删除题库
///
/// 删除接口的信封 data 为空，不能走信封负载路径，这里把整个
/// 信封解出来检查 success 标志。
///
/// # 参数
/// - `bank_id`: 题库 ID
pub async fn delete_bank(client: &HttpClient, bank_id: u64) -> ApiResult<()> {
    info!("🗑️ 删除题库: {}", bank_id);
    let body = client.delete_json(&format!("/bank/{}", bank_id)).await?;
    let envelope: ApiEnvelope = normalize(body)?;
    if envelope.success == Some(true) {
        Ok(())
    } else {
        Err(ApiError::normalize("删除题库未成功", envelope.display_message()))
    }
}

/// 合并两个题库为一个新题库
///
/// # 参数
/// - `request`: 合并请求，包含两个旧题库 ID 和新题库的名称简介
///
/// # 返回
/// 返回新题库的 ID
pub async fn merge_banks(client: &HttpClient, request: &MergeBankRequest) -> ApiResult<u64> {
    info!(
        "🔗 合并题库: {} + {} -> {}",
        request.bank_id1, request.bank_id2, request.name
    );
    let body = client.post_json("/bank/merge", request).await?;
    normalize(body)
}
