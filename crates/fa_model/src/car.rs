// crates/fa_model/src/car.rs

//! 赛车型号与阻力系数表
//!
//! `CarProfile` 是封闭枚举：型号集合固定，不支持运行时注册。
//! 阻力系数查表因此在类型层面穷尽，新增型号时编译器会强制
//! 补全所有 match 分支。
//!
//! 注意：`SimulationParameters` 中的 `car` 字段保持为字符串，
//! 在模型求值时才通过 [`CarProfile::from_str`] 解析。导入配置时
//! 不做型号校验，未知型号在下一次计算时以
//! [`ModelError::UnknownCarProfile`](crate::ModelError) 暴露。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// 赛车型号（封闭集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CarProfile {
    /// Mercedes W14
    #[serde(rename = "Mercedes W14")]
    MercedesW14,
    /// Red Bull RB19
    #[serde(rename = "Red Bull RB19")]
    RedBullRb19,
    /// Ferrari SF-23
    #[serde(rename = "Ferrari SF-23")]
    FerrariSf23,
}

impl CarProfile {
    /// 所有已知型号
    pub const ALL: [CarProfile; 3] = [
        CarProfile::MercedesW14,
        CarProfile::RedBullRb19,
        CarProfile::FerrariSf23,
    ];

    /// 阻力系数 Cd（无量纲）
    pub fn drag_coefficient(&self) -> f64 {
        match self {
            CarProfile::MercedesW14 => 0.82,
            CarProfile::RedBullRb19 => 0.75,
            CarProfile::FerrariSf23 => 0.80,
        }
    }

    /// 显示名称（与数据文件中的标识一致）
    pub fn display_name(&self) -> &'static str {
        match self {
            CarProfile::MercedesW14 => "Mercedes W14",
            CarProfile::RedBullRb19 => "Red Bull RB19",
            CarProfile::FerrariSf23 => "Ferrari SF-23",
        }
    }

    /// 导出文件名片段（空格替换为下划线）
    pub fn file_stem(&self) -> String {
        self.display_name().replace(' ', "_")
    }
}

impl fmt::Display for CarProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for CarProfile {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|c| c.display_name() == s)
            .copied()
            .ok_or_else(|| ModelError::unknown_car(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_coefficients() {
        assert!((CarProfile::MercedesW14.drag_coefficient() - 0.82).abs() < 1e-12);
        assert!((CarProfile::RedBullRb19.drag_coefficient() - 0.75).abs() < 1e-12);
        assert!((CarProfile::FerrariSf23.drag_coefficient() - 0.80).abs() < 1e-12);
    }

    #[test]
    fn test_from_str_known() {
        let car: CarProfile = "Red Bull RB19".parse().unwrap();
        assert_eq!(car, CarProfile::RedBullRb19);
    }

    #[test]
    fn test_from_str_unknown() {
        let result: Result<CarProfile, _> = "Williams FW45".parse();
        assert!(matches!(
            result,
            Err(ModelError::UnknownCarProfile { .. })
        ));
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(CarProfile::FerrariSf23.file_stem(), "Ferrari_SF-23");
        assert_eq!(CarProfile::RedBullRb19.file_stem(), "Red_Bull_RB19");
    }

    #[test]
    fn test_display_roundtrip() {
        for car in CarProfile::ALL {
            let parsed: CarProfile = car.to_string().parse().unwrap();
            assert_eq!(parsed, car);
        }
    }
}
