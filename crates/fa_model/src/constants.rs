// crates/fa_model/src/constants.rs

//! 空气物理常数
//!
//! 模型公式中的环境常数。默认值对应海平面标准大气与
//! 固定参考面积。

use serde::{Deserialize, Serialize};

/// 空气物理常数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirConstants {
    /// 空气密度 ρ [kg/m³]
    pub rho: f64,
    /// 参考面积 A [m²]
    pub reference_area: f64,
}

impl AirConstants {
    /// 海平面标准大气，固定参考面积
    pub fn sea_level() -> Self {
        Self {
            rho: 1.225,
            reference_area: 1.5,
        }
    }

    /// 动压系数 0.5·ρ·A
    ///
    /// 下压力与阻力公式共用的前置系数。
    #[inline]
    pub fn dynamic_factor(&self) -> f64 {
        0.5 * self.rho * self.reference_area
    }
}

impl Default for AirConstants {
    fn default() -> Self {
        Self::sea_level()
    }
}
