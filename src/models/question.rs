//! 题目相关模型
//!
//! content 服务不走统一信封，题目列表和判题结果都是裸 DTO。
//! 服务端字段大多可空，这里除了主键和题干以外全部宽容解析。

use serde::{Deserialize, Serialize};

/// 题型枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// 单选题
    Single,
    /// 多选题
    Multiple,
    /// 判断题
    TrueFalse,
    /// 填空题
    FillBlank,
    /// 简答题
    ShortAnswer,
}

impl QuestionType {
    /// 获取接口传输用的类型标识
    pub fn wire_name(self) -> &'static str {
        match self {
            QuestionType::Single => "single",
            QuestionType::Multiple => "multiple",
            QuestionType::TrueFalse => "true_false",
            QuestionType::FillBlank => "fill_blank",
            QuestionType::ShortAnswer => "short_answer",
        }
    }

    /// 获取题型展示名
    pub fn label(self) -> &'static str {
        match self {
            QuestionType::Single => "单选题",
            QuestionType::Multiple => "多选题",
            QuestionType::TrueFalse => "判断题",
            QuestionType::FillBlank => "填空题",
            QuestionType::ShortAnswer => "简答题",
        }
    }

    /// 从接口标识解析题型
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "single" => Some(QuestionType::Single),
            "multiple" => Some(QuestionType::Multiple),
            "true_false" => Some(QuestionType::TrueFalse),
            "fill_blank" => Some(QuestionType::FillBlank),
            "short_answer" => Some(QuestionType::ShortAnswer),
            _ => None,
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 客观题选项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionOption {
    /// 选项标号，如 "A"
    pub label: String,
    /// 选项内容
    pub text: String,
}

/// 题目 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u64,
    /// 题干，可能携带富文本标签
    pub content: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// 客观题选项，主观题下发 null 或空数组
    #[serde(default, deserialize_with = "null_to_default")]
    pub options: Vec<QuestionOption>,
    #[serde(default)]
    pub user_answer: Option<String>,
    #[serde(default)]
    pub correct_answer: Option<String>,
    #[serde(default)]
    pub analysis: Option<String>,
    /// 0 未作答，1 已作答
    #[serde(default)]
    pub is_completed: Option<i32>,
    /// 0 答错，1 答对，未作答时为 null
    #[serde(default)]
    pub is_correct: Option<i32>,
}

/// 拉取题目请求，服务端按字符串接收题库 ID
#[derive(Debug, Clone, Serialize)]
pub struct QuestionQuery {
    pub id: String,
    /// 拉取范围，"all" 或 "wrong"
    #[serde(rename = "type")]
    pub scope: String,
}

impl QuestionQuery {
    /// 拉取题库全部题目
    pub fn all(bank_id: u64) -> Self {
        Self {
            id: bank_id.to_string(),
            scope: "all".to_string(),
        }
    }

    /// 只拉取错题
    pub fn wrong(bank_id: u64) -> Self {
        Self {
            id: bank_id.to_string(),
            scope: "wrong".to_string(),
        }
    }
}

/// 判题请求
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyAnswerRequest {
    pub question_id: u64,
    pub user_answer: String,
}

/// 判题结果，content 服务直接下发裸对象
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerVerification {
    #[serde(default)]
    pub is_correct: bool,
    #[serde(default)]
    pub correct_answer: Option<String>,
    #[serde(default)]
    pub analysis: Option<String>,
    /// 服务端生成的反馈文案
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub question_id: Option<u64>,
    #[serde(default)]
    pub user_answer: Option<String>,
}

/// 把显式的 null 当作缺省值处理
fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let opt = Option::<T>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}
