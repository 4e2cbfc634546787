// apps/fa_cli/src/commands/export.rs

//! 导出命令
//!
//! 按文件名约定将 CSV（可选附带配置 JSON）写入输出目录。

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use fa_io::{csv_file_name, write_setup, CsvExporter};
use fa_model::compute_series;

use super::{build_store, SetupArgs};

/// 导出参数
#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub setup: SetupArgs,

    /// 输出目录
    #[arg(short, long, default_value = "output")]
    pub output: PathBuf,

    /// 同时导出配置 JSON
    #[arg(long)]
    pub with_setup: bool,
}

/// 执行导出命令
pub fn execute(args: ExportArgs) -> Result<()> {
    let store = build_store(&args.setup)?;
    let params = store.current();

    let series = compute_series(params)
        .map_err(fa_foundation::FaError::from)
        .context("气动力序列计算失败")?;

    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("无法创建输出目录 {}", args.output.display()))?;

    let csv_path = args.output.join(csv_file_name(series.car));
    CsvExporter::new()
        .write(&csv_path, &series)
        .map_err(fa_foundation::FaError::from)
        .context("CSV 导出失败")?;
    info!("CSV 已写入 {}", csv_path.display());

    if args.with_setup {
        let setup_path = args.output.join("setup.json");
        write_setup(&setup_path, params)
            .map_err(fa_foundation::FaError::from)
            .context("配置导出失败")?;
        info!("配置已写入 {}", setup_path.display());
    }

    Ok(())
}
