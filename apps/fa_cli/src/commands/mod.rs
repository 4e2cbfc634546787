// apps/fa_cli/src/commands/mod.rs

//! 命令实现

pub mod export;
pub mod presets;
pub mod run;
pub mod validate;

use anyhow::Result;
use tracing::warn;

use fa_io::parse_setup;
use fa_session::{preset, ParameterStore};

/// 参数来源标志（run 与 export 共用）
#[derive(Debug, clap::Args)]
pub struct SetupArgs {
    /// 车速 [km/h]
    #[arg(long)]
    pub speed: Option<f64>,

    /// 尾翼角度 [度]
    #[arg(long)]
    pub angle: Option<f64>,

    /// 赛车型号 (如 "Ferrari SF-23")
    #[arg(long)]
    pub car: Option<String>,

    /// 内置预设名 (Wet Track / Qualifying / Low Downforce)
    #[arg(long)]
    pub preset: Option<String>,

    /// JSON 配置文件路径
    #[arg(long)]
    pub setup: Option<std::path::PathBuf>,
}

/// 按 预设 → JSON 文件 → 单字段标志 的顺序构建参数存储
///
/// JSON 文件非法时记录日志并继续（参数保持不变），与导入边界的
/// 本地恢复策略一致。
pub fn build_store(args: &SetupArgs) -> Result<ParameterStore> {
    let mut store = ParameterStore::new();

    if let Some(name) = &args.preset {
        let params = preset(name)
            .ok_or_else(|| anyhow::anyhow!("未知预设 '{}', 可用: {:?}", name, fa_session::preset_names()))?;
        store.apply_patch(&fa_model::SetupPatch::from_params(&params));
    }

    if let Some(path) = &args.setup {
        let content = std::fs::read_to_string(path)?;
        match parse_setup(&content) {
            Ok(patch) => {
                store.apply_patch(&patch);
            }
            Err(e) => {
                // 非法 JSON 就地恢复：记录并继续，参数不变
                warn!("配置文件 {} 解析失败, 参数保持不变: {}", path.display(), e);
            }
        }
    }

    if let Some(speed) = args.speed {
        store.set_speed(speed);
    }
    if let Some(angle) = args.angle {
        store.set_angle(angle);
    }
    if let Some(car) = &args.car {
        store.set_car(car.clone());
    }

    Ok(store)
}
