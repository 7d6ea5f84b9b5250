//! # EasyTiwu Client
//!
//! 题库练习系统的 Rust 客户端，对接网关后面的各业务服务
//!
//! ## 架构设计
//!
//! 本系统采用分层架构，请求自下而上穿过四层：
//!
//! ### ① 客户端层（Client）
//! - `client/` - 持有 reqwest 连接，统一超时与错误映射
//! - `HttpClient` - 两档超时（常规 30 秒、上传 60 秒），带观察钩子
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 纯函数能力，不持有任何连接
//! - `normalizer` - 信封 / 裸 DTO 双形状归一化
//! - `classifier` - 错误四分类与中文文案
//! - `precheck` - 上传前的本地表单校验
//!
//! ### ③ 接口层（Api）
//! - `api/` - 按服务划分的接口封装（statistics / bank / content / upload / auth）
//! - 每个函数 = 拼请求 + 归一化，不做状态管理
//!
//! ### ④ 流程层（Workflow）
//! - `workflow/` - 一次获取的完整生命周期
//! - `FetchState` - Idle / Loading / Success / Failed 状态机
//! - `StatisticsFlow` - 统计概览获取流程，可反复 refresh
//!
//! ## 模块结构

pub mod api;
pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use client::{HttpClient, LoggingHook, RequestHook};
pub use config::Config;
pub use error::{ApiError, ApiResult, ClassifiedError, ErrorCategory};
pub use models::{QuestionBank, StatisticsOverview, StatisticsRow};
pub use workflow::{FetchState, StatisticsFlow};
