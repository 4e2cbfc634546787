// crates/fa_model/src/force.rs

//! 气动力序列计算
//!
//! 在固定的 51 点速度域（100 到 300 km/h，步长 4）上计算下压力
//! 与阻力。速度域与当前车速参数无关：当前车速只影响展示层的
//! 高亮选取，不影响序列生成。
//!
//! # 不变式
//!
//! - 序列长度恒为 [`SPEED_SAMPLES`]，速度升序
//! - 下压力只依赖角度与速度，与赛车型号无关
//! - 阻力只依赖赛车 Cd 与速度，与角度无关
//! - 纯函数：无副作用、确定性、可并发调用
//!
//! # 边界行为
//!
//! 角度超出 [0,45] 不在此处拒绝（输入边界负责），公式按原样计算；
//! 仅赛车型号按封闭集合校验。

use serde::{Deserialize, Serialize};

use fa_foundation::units::kmh_to_ms;

use crate::car::CarProfile;
use crate::constants::AirConstants;
use crate::error::{ModelError, ModelResult};
use crate::params::SimulationParameters;

/// 速度域采样点数
pub const SPEED_SAMPLES: usize = 51;

/// 速度域起点 [km/h]
pub const SPEED_START_KMH: f64 = 100.0;

/// 速度域步长 [km/h]
pub const SPEED_STEP_KMH: f64 = 4.0;

/// 单个采样点
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceSample {
    /// 速度 [km/h]
    pub speed_kmh: f64,
    /// 下压力 [N]
    pub downforce_n: f64,
    /// 阻力 [N]
    pub drag_n: f64,
}

/// 气动力序列（51 个采样点，速度升序）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForceSeries {
    /// 计算时使用的赛车型号
    pub car: CarProfile,
    /// 计算时使用的尾翼角度 [度]
    pub angle_deg: f64,
    /// 采样点
    pub samples: Vec<ForceSample>,
}

impl ForceSeries {
    /// 采样点数
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// 序列是否为空
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// 下压力峰值 [N]
    pub fn peak_downforce(&self) -> f64 {
        self.samples
            .iter()
            .map(|s| s.downforce_n)
            .fold(0.0, f64::max)
    }

    /// 阻力峰值 [N]
    pub fn peak_drag(&self) -> f64 {
        self.samples.iter().map(|s| s.drag_n).fold(0.0, f64::max)
    }

    /// 距给定速度最近的采样点
    ///
    /// 展示层用于高亮当前车速对应的点。
    pub fn nearest_sample(&self, speed_kmh: f64) -> Option<&ForceSample> {
        self.samples.iter().min_by(|a, b| {
            let da = (a.speed_kmh - speed_kmh).abs();
            let db = (b.speed_kmh - speed_kmh).abs();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
    }
}

/// 角度因子 1 + angle/45
///
/// 角度在 [0,45] 内时取值 [1,2]。
#[inline]
pub fn angle_factor(angle_deg: f64) -> f64 {
    1.0 + angle_deg / 45.0
}

/// 计算气动力序列
///
/// # 参数
///
/// - `params`: 仿真参数；`car` 在此处按封闭集合解析，
///   `speed_kmh` 与 `angle_deg` 要求有限
///
/// # 错误
///
/// - [`ModelError::UnknownCarProfile`]: 型号不在封闭集合内
/// - [`ModelError::NonFiniteParameter`]: 速度或角度非有限
pub fn compute_series(params: &SimulationParameters) -> ModelResult<ForceSeries> {
    compute_series_with(params, &AirConstants::default())
}

/// 使用指定物理常数计算气动力序列
pub fn compute_series_with(
    params: &SimulationParameters,
    constants: &AirConstants,
) -> ModelResult<ForceSeries> {
    let car: CarProfile = params.car.parse()?;

    if !params.speed_kmh.is_finite() {
        return Err(ModelError::NonFiniteParameter {
            field: "speed_kmh",
            value: params.speed_kmh,
        });
    }
    if !params.angle_deg.is_finite() {
        return Err(ModelError::NonFiniteParameter {
            field: "angle_deg",
            value: params.angle_deg,
        });
    }

    let factor = angle_factor(params.angle_deg);
    let cd = car.drag_coefficient();
    let q = constants.dynamic_factor();

    let samples = (0..SPEED_SAMPLES)
        .map(|i| {
            let speed_kmh = SPEED_START_KMH + SPEED_STEP_KMH * i as f64;
            let v = kmh_to_ms(speed_kmh);
            let v2 = v * v;
            ForceSample {
                speed_kmh,
                downforce_n: q * v2 * factor,
                drag_n: q * cd * v2,
            }
        })
        .collect();

    Ok(ForceSeries {
        car,
        angle_deg: params.angle_deg,
        samples,
    })
}
