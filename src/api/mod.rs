//! API 模块
//!
//! 网关各业务接口的薄封装，按服务划分文件。所有函数只负责
//! 拼请求和归一化响应，错误分类与状态管理在上层处理。

pub mod auth;
pub mod bank;
pub mod content;
pub mod statistics;
pub mod upload;

// 重新导出常用函数
pub use bank::{delete_bank, fetch_banks, merge_banks};
pub use content::{fetch_questions, verify_answer};
pub use statistics::{fetch_overview, health_check};
pub use upload::upload_bank;
