//! HTTP 客户端
//!
//! 封装对网关的所有 HTTP 调用。两档超时对应两个内部 client：
//! 常规接口 30 秒，文件上传解析慢放宽到 60 秒。
//!
//! 网关内部已经带重试，这里单次请求失败就直接返回错误，
//! 客户端侧不做任何重试。

use std::sync::Arc;

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::client::hooks::{LoggingHook, RequestHook};
use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::utils::logging::truncate_text;

/// 网关 HTTP 客户端
#[derive(Clone)]
pub struct HttpClient {
    /// 常规请求，30 秒超时
    client: reqwest::Client,
    /// 上传请求，60 秒超时
    upload_client: reqwest::Client,
    base_url: String,
    hooks: Vec<Arc<dyn RequestHook>>,
}

impl HttpClient {
    /// 创建新的客户端，默认挂上日志钩子
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .default_headers(headers)
            .build()
            .context("构建常规 HTTP 客户端失败")?;

        let upload_client = reqwest::Client::builder()
            .timeout(config.upload_timeout())
            .build()
            .context("构建上传 HTTP 客户端失败")?;

        Ok(Self {
            client,
            upload_client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            hooks: vec![Arc::new(LoggingHook)],
        })
    }

    /// 追加一个观察钩子
    pub fn with_hook(mut self, hook: Arc<dyn RequestHook>) -> Self {
        self.hooks.push(hook);
        self
    }

    /// API 基础地址
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET 请求，返回解析后的 JSON
    pub async fn get_json(&self, path: &str) -> ApiResult<Value> {
        let url = self.join_url(path);
        let request = self.client.get(&url);
        self.execute(Method::GET, path, &url, request).await
    }

    /// POST JSON 请求，返回解析后的 JSON
    pub async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<Value> {
        let url = self.join_url(path);
        let request = self.client.post(&url).json(body);
        self.execute(Method::POST, path, &url, request).await
    }

    /// DELETE 请求，返回解析后的 JSON
    pub async fn delete_json(&self, path: &str) -> ApiResult<Value> {
        let url = self.join_url(path);
        let request = self.client.delete(&url);
        self.execute(Method::DELETE, path, &url, request).await
    }

    /// POST multipart 表单，走 60 秒超时的上传通道
    pub async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ApiResult<Value> {
        let url = self.join_url(path);
        let request = self.upload_client.post(&url).multipart(form);
        self.execute(Method::POST, path, &url, request).await
    }

    /// 统一的请求执行路径
    ///
    /// 传输失败、非 2xx 状态、响应体不是 JSON 分别映射到
    /// `Transport`、`Http`、`Normalize` 三类错误。
    async fn execute(
        &self,
        method: Method,
        endpoint: &str,
        url: &str,
        request: reqwest::RequestBuilder,
    ) -> ApiResult<Value> {
        for hook in &self.hooks {
            hook.on_request(&method, url);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                for hook in &self.hooks {
                    hook.on_transport_error(&method, url, &e);
                }
                return Err(ApiError::transport(endpoint, e));
            }
        };

        let status = response.status();
        for hook in &self.hooks {
            hook.on_response(&method, url, status);
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::transport(endpoint, e))?;

        if !status.is_success() {
            debug!(
                "HTTP {} 响应体: {}",
                status.as_u16(),
                truncate_text(&body, 200)
            );
            return Err(ApiError::Http {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        self.parse_body(status, &body)
    }

    fn parse_body(&self, status: StatusCode, body: &str) -> ApiResult<Value> {
        // 服务端偶尔用 204 或空体表示无内容
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(body).map_err(|e| {
            debug!(
                "响应体不是合法 JSON (HTTP {}): {}",
                status.as_u16(),
                truncate_text(body, 200)
            );
            ApiError::normalize(format!("响应不是合法 JSON: {}", e), None)
        })
    }

    fn join_url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}
