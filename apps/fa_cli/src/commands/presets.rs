// apps/fa_cli/src/commands/presets.rs

//! 预设列表命令
//!
//! 列出内置预设与默认已存配置。

use anyhow::Result;
use clap::Args;
use tracing::info;

use fa_session::{preset, preset_names, ParameterStore};

/// 预设列表参数
#[derive(Args)]
pub struct PresetsArgs {}

/// 执行预设列表命令
pub fn execute(_args: PresetsArgs) -> Result<()> {
    info!("内置预设:");
    for name in preset_names() {
        // 预设表封闭，名称必然可解析
        if let Some(p) = preset(name) {
            info!(
                "  {:<14} 车速={} km/h, 角度={}°, 型号={}",
                name, p.speed_kmh, p.angle_deg, p.car
            );
        }
    }

    let store = ParameterStore::new();
    info!("默认已存配置:");
    for saved in store.saved() {
        info!(
            "  {:<18} 车速={} km/h, 角度={}°, 型号={}",
            saved.name, saved.params.speed_kmh, saved.params.angle_deg, saved.params.car
        );
    }

    Ok(())
}
