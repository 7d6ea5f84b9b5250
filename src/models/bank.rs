//! 题库模型

use serde::{Deserialize, Serialize};

/// 题库 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionBank {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// 题目总数
    #[serde(default)]
    pub total_count: Option<u64>,
    /// 已完成题目数
    #[serde(default)]
    pub completed_count: Option<u64>,
    /// 错题数
    #[serde(default)]
    pub wrong_count: Option<u64>,
}

/// 合并题库请求，两个旧题库合并为一个新题库
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeBankRequest {
    pub bank_id1: u64,
    pub bank_id2: u64,
    /// 新题库名称
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
