//! 认证服务接口
//!
//! 认证接口挂在 /api/v1/auth 下，不吃网关的 /api 前缀剥离，
//! 所以这里的路径要再带一层 /api，拼出来的完整路径是
//! /api/api/v1/auth/*，网关剥掉第一层后正好命中。

use tracing::info;

use crate::client::HttpClient;
use crate::error::ApiResult;
use crate::models::{LoginRequest, RegisterRequest, User};
use crate::services::normalizer::normalize;

/// 登录
///
/// # 返回
/// 返回登录成功的用户信息，账号密码错误时信封里的提示会作为
/// `Normalize` 错误的 detail 透出
pub async fn login(client: &HttpClient, email: &str, password: &str) -> ApiResult<User> {
    info!("🔑 登录: {}", email);
    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    let body = client.post_json("/api/v1/auth/login", &request).await?;
    normalize(body)
}

/// 注册新用户
pub async fn register(
    client: &HttpClient,
    username: &str,
    email: &str,
    password: &str,
) -> ApiResult<User> {
    info!("🆕 注册: {}", email);
    let request = RegisterRequest {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };
    let body = client.post_json("/api/v1/auth/register", &request).await?;
    normalize(body)
}
