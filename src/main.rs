// ==========================================
// 调拨单派工看板 - 命令行入口
// ==========================================
// 用途: 读取一份响应体 JSON 文件, 执行一次刷新与聚合,
//       将分组视图以 JSON 输出（展示层之外的最小驱动）
// ==========================================

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;

use transfer_dispatch::api::DashboardApi;
use transfer_dispatch::config::{AssignmentTable, TimeCutoffConfig};
use transfer_dispatch::engine::refresh::{
    RefreshCoordinator, RefreshOutcome, DEFAULT_REFRESH_INTERVAL,
};
use transfer_dispatch::source::JsonFileSource;

#[tokio::main]
async fn main() -> Result<()> {
    transfer_dispatch::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", transfer_dispatch::APP_NAME);
    tracing::info!("系统版本: {}", transfer_dispatch::VERSION);
    tracing::info!("==================================================");

    let path = std::env::args()
        .nth(1)
        .context("用法: transfer-dispatch <响应体JSON文件> [--watch]")?;
    let watch = std::env::args().any(|arg| arg == "--watch");

    let source = Arc::new(JsonFileSource::new(&path));
    let coordinator = Arc::new(RefreshCoordinator::new(source));
    let api = DashboardApi::new(
        Arc::clone(&coordinator),
        AssignmentTable::deployment_default(),
        TimeCutoffConfig::deployment_default(),
    );

    if watch {
        // 周期拉取模式: 首个 tick 立即拉取一次, 之后按固定间隔重拉并输出
        let _periodic = Arc::clone(&coordinator).spawn_periodic(DEFAULT_REFRESH_INTERVAL);
        loop {
            tokio::time::sleep(DEFAULT_REFRESH_INTERVAL).await;
            let status = api.refresh_status().await;
            if let Some(reason) = &status.last_error {
                tracing::warn!("上次拉取失败, 展示陈旧快照: {}", reason);
            }
            let view = api.grouped_view(Utc::now()).await;
            println!("{}", serde_json::to_string_pretty(view.as_ref())?);
        }
    }

    match api.refresh_now().await {
        RefreshOutcome::Completed { record_count, .. } => {
            tracing::info!("拉取完成: {} 条待处理调拨单", record_count);
        }
        RefreshOutcome::Failed { reason, .. } => {
            anyhow::bail!("拉取失败: {}", reason);
        }
        // 单线入口不存在在途拉取
        RefreshOutcome::AlreadyInFlight => {}
    }

    let view = api.grouped_view(Utc::now()).await;
    println!("{}", serde_json::to_string_pretty(view.as_ref())?);

    Ok(())
}
