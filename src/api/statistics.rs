//! 统计服务接口

use tracing::debug;

use crate::client::HttpClient;
use crate::error::ApiResult;
use crate::models::StatisticsOverview;
use crate::services::normalizer::normalize;

/// 获取统计概览
///
/// # 参数
/// - `client`: HTTP 客户端
///
/// # 返回
/// 返回全库统计概览
pub async fn fetch_overview(client: &HttpClient) -> ApiResult<StatisticsOverview> {
    debug!("📊 获取统计概览");
    let body = client.get_json("/statistics/overview").await?;
    normalize(body)
}

/// 统计服务健康检查
///
/// # 返回
/// 返回服务端的状态描述文本
pub async fn health_check(client: &HttpClient) -> ApiResult<String> {
    let body = client.get_json("/statistics/health").await?;
    normalize(body)
}
