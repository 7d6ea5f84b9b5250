pub mod bank;
pub mod envelope;
pub mod error_code;
pub mod question;
pub mod statistics;
pub mod user;

pub use bank::{MergeBankRequest, QuestionBank};
pub use envelope::ApiEnvelope;
pub use question::{
    AnswerVerification, Question, QuestionOption, QuestionQuery, QuestionType, VerifyAnswerRequest,
};
pub use statistics::{StatisticsOverview, StatisticsRow, TypeStats};
pub use user::{LoginRequest, RegisterRequest, User};
