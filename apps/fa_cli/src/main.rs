// apps/fa_cli/src/main.rs

//! F1Aero 命令行界面
//!
//! 提供气动力仿真的命令行工具。
//!
//! # 架构层级
//!
//! 本模块属于 **Layer 4: Application**：
//! - 参数来源（命令行标志 / 预设 / JSON 文件）在此层归一化
//! - 错误通过 tracing 呈现为验证消息，anyhow 只用于应用边界

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// F1Aero 气动力仿真命令行工具
#[derive(Parser)]
#[command(name = "fa_cli")]
#[command(author = "F1Aero Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "F1 downforce and drag simulator", long_about = None)]
struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 计算气动力序列
    Run(commands::run::RunArgs),
    /// 导出 CSV 与配置文件
    Export(commands::export::ExportArgs),
    /// 列出内置预设与默认配置
    Presets(commands::presets::PresetsArgs),
    /// 验证配置文件
    Validate(commands::validate::ValidateArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日志
    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // 执行命令
    match cli.command {
        Commands::Run(args) => commands::run::execute(args),
        Commands::Export(args) => commands::export::execute(args),
        Commands::Presets(args) => commands::presets::execute(args),
        Commands::Validate(args) => commands::validate::execute(args),
    }
}
