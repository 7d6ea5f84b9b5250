use anyhow::Result;
use futures::future;
use tracing::{error, info, warn};

use crate::api;
use crate::client::HttpClient;
use crate::config::Config;
use crate::models::StatisticsOverview;
use crate::utils::logging::{init_log_file, log_startup, truncate_text};
use crate::utils::number::format_number;
use crate::workflow::StatisticsFlow;

/// 应用主结构
pub struct App {
    config: Config,
    client: HttpClient,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        init_log_file(&config.output_log_file)?;
        log_startup(&config.api_base_url);

        let client = HttpClient::new(&config)?;

        Ok(Self { config, client })
    }

    /// 运行应用主逻辑
    ///
    /// 先并发探测各服务健康状态，列出现有题库，再拉取统计概览并输出。
    pub async fn run(&self) -> Result<()> {
        self.probe_services().await;
        self.list_banks().await;

        let mut flow = StatisticsFlow::new(self.client.clone());
        let state = flow.refresh().await;

        if let Some(overview) = state.overview() {
            print_overview(overview);
            Ok(())
        } else if let Some(classified) = state.error() {
            error!("❌ {}", classified.message);
            anyhow::bail!("{}", classified.message)
        } else {
            // refresh 返回后只会停在 Success 或 Failed
            anyhow::bail!("获取统计数据未返回结果")
        }
    }

    /// 并发探测统计和题库服务
    ///
    /// 探测失败不阻断主流程，只是提前给出服务状态提示。
    async fn probe_services(&self) -> (bool, bool) {
        let (statistics, bank) = future::join(
            api::statistics::health_check(&self.client),
            api::bank::health_check(&self.client),
        )
        .await;

        let statistics_ok = match statistics {
            Ok(status) => {
                info!("✓ 统计服务: {}", status);
                true
            }
            Err(e) => {
                warn!("⚠️ 统计服务探测失败: {}", e);
                false
            }
        };

        let bank_ok = match bank {
            Ok(status) => {
                info!("✓ 题库服务: {}", status);
                true
            }
            Err(e) => {
                warn!("⚠️ 题库服务探测失败: {}", e);
                false
            }
        };

        if self.config.verbose_logging {
            info!(
                "服务探测结果: statistics={}, bank={}",
                statistics_ok, bank_ok
            );
        }

        (statistics_ok, bank_ok)
    }

    /// 列出现有题库
    ///
    /// 列表拉不到不阻断主流程，统计概览是这次运行的主要输出。
    async fn list_banks(&self) {
        match api::bank::fetch_banks(&self.client).await {
            Ok(banks) => {
                info!("📚 共 {} 个题库", banks.len());
                for bank in &banks {
                    let description = bank
                        .description
                        .as_deref()
                        .map(|d| format!(" - {}", truncate_text(d, 30)))
                        .unwrap_or_default();
                    info!(
                        "  [{}] {}{} (共 {} 题, 已完成 {}, 错题 {})",
                        bank.id,
                        bank.name,
                        description,
                        format_number(bank.total_count),
                        format_number(bank.completed_count),
                        format_number(bank.wrong_count)
                    );
                }
            }
            Err(e) => warn!("⚠️ 题库列表获取失败: {}", e),
        }
    }
}

// ========== 输出辅助函数 ==========

fn print_overview(overview: &StatisticsOverview) {
    info!("{}", "=".repeat(60));
    info!("📊 题库统计概览");
    info!(
        "统计时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("📚 题库总数: {}", format_number(overview.bank_total));
    info!("📝 题目总数: {}", format_number(overview.question_total));

    let rows = overview.to_rows();
    if !rows.is_empty() {
        info!("{}", "─".repeat(60));
        for row in &rows {
            info!(
                "  {}: 共 {} 题, 已完成 {}, 答对 {}, 正确率 {}",
                row.type_label,
                format_number(row.count),
                format_number(row.completed_count),
                format_number(row.correct_count),
                row.accuracy
            );
        }
    }
    info!("{}", "=".repeat(60));
}
