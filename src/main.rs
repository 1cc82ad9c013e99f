use anyhow::Result;
use dset_generator::orchestrator::RunOutcome;
use dset_generator::{logger, App, Config};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logger::init_with_verbose(config.verbose_logging);

    // 初始化并运行应用
    let summary = App::initialize(config)?.run().await?;

    if let RunOutcome::Bookmarked { row_index } = summary.outcome {
        info!("本次运行在第 {} 题中断，修复后重新运行即可继续", row_index + 1);
    }

    Ok(())
}
