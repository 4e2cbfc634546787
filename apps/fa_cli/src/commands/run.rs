// apps/fa_cli/src/commands/run.rs

//! 运行仿真命令
//!
//! 计算当前参数下的气动力序列并输出摘要，可选导出 CSV。

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use fa_io::CsvExporter;
use fa_model::compute_series;

use super::{build_store, SetupArgs};

/// 运行仿真参数
#[derive(Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub setup: SetupArgs,

    /// 可选的 CSV 输出路径
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

/// 执行运行命令
pub fn execute(args: RunArgs) -> Result<()> {
    let store = build_store(&args.setup)?;
    let params = store.current();

    info!("=== F1Aero 仿真 ===");
    info!(
        "参数: 车速={} km/h, 角度={}°, 型号={}",
        params.speed_kmh, params.angle_deg, params.car
    );

    let series = compute_series(params)
        .map_err(fa_foundation::FaError::from)
        .context("气动力序列计算失败")?;

    info!(
        "序列: {} 点, 速度域 {}..{} km/h",
        series.len(),
        series.samples[0].speed_kmh,
        series.samples[series.len() - 1].speed_kmh
    );
    info!(
        "峰值: 下压力={:.2} N, 阻力={:.2} N",
        series.peak_downforce(),
        series.peak_drag()
    );

    if let Some(sample) = series.nearest_sample(params.speed_kmh) {
        info!(
            "当前车速附近 ({} km/h): 下压力={:.2} N, 阻力={:.2} N",
            sample.speed_kmh, sample.downforce_n, sample.drag_n
        );
    }

    if let Some(path) = &args.csv {
        CsvExporter::new()
            .write(path, &series)
            .map_err(fa_foundation::FaError::from)
            .context("CSV 导出失败")?;
        info!("CSV 已写入 {}", path.display());
    }

    Ok(())
}
