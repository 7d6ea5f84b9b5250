//! 上传前的本地校验
//!
//! 上传接口要解析整个文件，超时放得很宽，不合规的请求应该在
//! 本地拦下来，不要白白占一次 60 秒的上传通道。规则与服务端
//! 一致：名称必填不超过 15 字，简介不超过 30 字，文件必须存在
//! 且为支持的格式。

use std::path::Path;

/// 服务端支持解析的文件扩展名
const SUPPORTED_EXTENSIONS: [&str; 4] = ["pdf", "docx", "doc", "txt"];

/// 校验上传表单
///
/// # 参数
/// - `name`: 题库名称
/// - `description`: 题库简介，可为空
/// - `file_path`: 待上传文件路径
///
/// # 返回
/// 校验通过返回 Ok，否则返回全部未通过项的提示文案
pub fn validate_upload(
    name: &str,
    description: Option<&str>,
    file_path: &Path,
) -> Result<(), Vec<String>> {
    let mut problems = Vec::new();

    let name = name.trim();
    if name.is_empty() {
        problems.push("请输入题库名称".to_string());
    } else if name.chars().count() > 15 {
        problems.push("题库名称不能超过 15 个字符".to_string());
    }

    if let Some(description) = description {
        if description.chars().count() > 30 {
            problems.push("题库简介不能超过 30 个字符".to_string());
        }
    }

    match std::fs::metadata(file_path) {
        Ok(meta) if meta.is_file() => {
            if meta.len() == 0 {
                problems.push("文件内容为空".to_string());
            }
            if !has_supported_extension(file_path) {
                problems.push("仅支持 PDF、Word (.docx/.doc) 或 TXT 文件".to_string());
            }
        }
        _ => problems.push("请选择要上传的文件".to_string()),
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(problems)
    }
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let lower = ext.to_lowercase();
            SUPPORTED_EXTENSIONS.contains(&lower.as_str())
        })
        .unwrap_or(false)
}
