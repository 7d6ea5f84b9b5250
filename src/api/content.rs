//! 内容服务接口
//!
//! content 服务不走统一信封，直接返回裸 DTO，normalizer 的
//! 裸路径会处理这种形状。

use tracing::debug;

use crate::client::HttpClient;
use crate::error::ApiResult;
use crate::models::{AnswerVerification, Question, QuestionQuery, VerifyAnswerRequest};
use crate::services::normalizer::normalize;

/// 拉取题目列表
///
/// # 参数
/// - `query`: 拉取范围，见 [`QuestionQuery::all`] 和 [`QuestionQuery::wrong`]
///
/// # 返回
/// 返回题目数组，空题库返回空数组
pub async fn fetch_questions(
    client: &HttpClient,
    query: &QuestionQuery,
) -> ApiResult<Vec<Question>> {
    debug!("📝 拉取题目: bank_id={}, scope={}", query.id, query.scope);
    let body = client.post_json("/content/questions", query).await?;
    normalize(body)
}

/// 提交答案判题
///
/// # 参数
/// - `question_id`: 题目 ID
/// - `user_answer`: 用户作答
///
/// # 返回
/// 返回判题结果，包含正确答案和解析
pub async fn verify_answer(
    client: &HttpClient,
    question_id: u64,
    user_answer: &str,
) -> ApiResult<AnswerVerification> {
    debug!("✏️ 判题: question_id={}", question_id);
    let request = VerifyAnswerRequest {
        question_id,
        user_answer: user_answer.to_string(),
    };
    let body = client.post_json("/content/verify-answer", &request).await?;
    normalize(body)
}
