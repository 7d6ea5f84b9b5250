//! 统计获取流程 - 流程层
//!
//! 核心职责：管理一次统计概览获取的完整生命周期
//!
//! 状态走向：
//! 1. refresh 入口同步切到 Loading，旧的结果和错误同时清掉
//! 2. 请求成功落到 Success，失败经过分类器落到 Failed
//! 3. 任何状态下都可以再次 refresh 重新发起

use tracing::{info, warn};

use crate::api::statistics::fetch_overview;
use crate::client::HttpClient;
use crate::services::classifier::classify;
use crate::workflow::fetch_state::FetchState;

/// 统计获取流程
///
/// - 编排请求、归一化、错误分类
/// - 持有客户端句柄，不持有请求中间态
/// - 独占可变引用保证同一时刻只有一个在途请求
pub struct StatisticsFlow {
    client: HttpClient,
    state: FetchState,
}

impl StatisticsFlow {
    /// 创建新的统计获取流程，初始状态为 Idle
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            state: FetchState::Idle,
        }
    }

    /// 当前状态
    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// 拉取统计概览
    ///
    /// # 返回
    /// 返回本次拉取后的状态，Success 或 Failed 二选一
    pub async fn refresh(&mut self) -> &FetchState {
        self.state = FetchState::Loading;
        info!("📊 开始获取统计数据...");

        match fetch_overview(&self.client).await {
            Ok(overview) => {
                info!(
                    "✓ 统计数据获取成功: {} 个题库, {} 道题",
                    overview.bank_total, overview.question_total
                );
                self.state = FetchState::Success(overview);
            }
            Err(e) => {
                let classified = classify(&e);
                warn!(
                    "⚠️ 统计数据获取失败 [{:?}]: {}",
                    classified.category, classified.message
                );
                self.state = FetchState::Failed(classified);
            }
        }

        &self.state
    }
}
