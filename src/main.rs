use anyhow::Result;

use easytiwu_client::app::App;
use easytiwu_client::config::Config;
use easytiwu_client::utils::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 加载配置
    let config = Config::load("easytiwu.toml");

    // 初始化并运行应用
    App::initialize(config).await?.run().await?;

    Ok(())
}
