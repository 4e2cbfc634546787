// crates/fa_session/src/presets.rs

//! 内置预设表
//!
//! 固定的命名预设到完整仿真参数的映射，进程启动即存在，不可变，
//! 用作一键导入源。集合封闭：不支持运行时注册新预设。

use fa_model::SimulationParameters;

/// 预设名称（固定顺序）
const PRESET_NAMES: [&str; 3] = ["Wet Track", "Qualifying", "Low Downforce"];

/// 按名称查找预设
///
/// 返回 `None` 表示名称不在预设表中。
pub fn preset(name: &str) -> Option<SimulationParameters> {
    match name {
        "Wet Track" => Some(SimulationParameters::new(180.0, 20.0, "Mercedes W14")),
        "Qualifying" => Some(SimulationParameters::new(300.0, 30.0, "Red Bull RB19")),
        "Low Downforce" => Some(SimulationParameters::new(320.0, 5.0, "Ferrari SF-23")),
        _ => None,
    }
}

/// 所有预设名称
pub fn preset_names() -> &'static [&'static str] {
    &PRESET_NAMES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_names_resolve() {
        for name in preset_names() {
            assert!(preset(name).is_some(), "preset '{}' missing", name);
        }
    }

    #[test]
    fn test_qualifying_values() {
        let p = preset("Qualifying").unwrap();
        assert!((p.speed_kmh - 300.0).abs() < 1e-12);
        assert!((p.angle_deg - 30.0).abs() < 1e-12);
        assert_eq!(p.car, "Red Bull RB19");
    }

    #[test]
    fn test_unknown_preset() {
        assert!(preset("Race Start").is_none());
    }

    #[test]
    fn test_presets_are_valid_parameters() {
        // 预设必须能直接通过输入边界校验
        for name in preset_names() {
            assert!(preset(name).unwrap().validate().is_ok());
        }
    }
}
