//! 上传服务接口

use reqwest::multipart::{Form, Part};
use tracing::info;

use crate::client::HttpClient;
use crate::error::ApiResult;
use crate::services::normalizer::normalize;

/// 上传文件创建题库
///
/// 服务端要解析文件并调用大模型出题，耗时较长，这个请求走
/// 60 秒超时的上传通道。文件读取由调用方完成，这里只管组装
/// multipart 表单。
///
/// # 参数
/// - `name`: 题库名称
/// - `description`: 题库简介，可为空
/// - `file_name`: 原始文件名，服务端按扩展名选择解析器
/// - `content`: 文件内容
///
/// # 返回
/// 返回服务端的处理结果描述
pub async fn upload_bank(
    client: &HttpClient,
    name: &str,
    description: Option<&str>,
    file_name: &str,
    content: Vec<u8>,
) -> ApiResult<String> {
    info!("📤 上传题库文件: {} ({} 字节)", file_name, content.len());

    let file_part = Part::bytes(content).file_name(file_name.to_string());
    let form = Form::new()
        .text("name", name.to_string())
        .text("description", description.unwrap_or("").to_string())
        .part("file", file_part);

    let body = client.post_multipart("/upload", form).await?;
    normalize(body)
}
