// crates/fa_model/src/lib.rs

//! F1Aero 气动力模型层 (Layer 2)
//!
//! 给定仿真参数（速度、尾翼角度、赛车型号），在固定速度域上计算
//! 下压力与阻力序列。本层为纯函数层：不持有状态、不产生副作用、
//! 结果完全由输入决定。
//!
//! # 模块概览
//!
//! - [`car`]: `CarProfile` 封闭枚举与阻力系数表
//! - [`constants`]: `AirConstants` 空气物理常数
//! - [`params`]: `SimulationParameters` 与 `SetupPatch`
//! - [`force`]: `ForceSample` / `ForceSeries` 与 [`compute_series`]
//! - [`error`]: 模型层错误类型
//!
//! # 物理模型
//!
//! 下压力与阻力均为速度平方律：
//!
//! ```text
//! downforce = 0.5 · ρ · A · v² · (1 + angle/45)
//! drag      = 0.5 · ρ · A · Cd · v²
//! ```
//!
//! 其中 ρ = 1.225 kg/m³，A = 1.5 m²，v 为 m/s。下压力只依赖角度，
//! 阻力只依赖赛车的 Cd，两条序列相互独立。

#![warn(missing_docs)]

pub mod car;
pub mod constants;
pub mod error;
pub mod force;
pub mod params;

/// 层级标识
pub const LAYER: u8 = 2;

pub use car::CarProfile;
pub use constants::AirConstants;
pub use error::{ModelError, ModelResult};
pub use force::{compute_series, ForceSample, ForceSeries, SPEED_SAMPLES};
pub use params::{SetupPatch, SimulationParameters};
