// crates/fa_foundation/src/units.rs

//! 速度单位转换
//!
//! 气动力公式使用 SI 单位 (m/s)，而用户界面与数据文件使用 km/h。
//! 转换因子 3.6 在此处唯一定义，避免散落在各层。

/// km/h 到 m/s 的转换因子
pub const KMH_PER_MS: f64 = 3.6;

/// 将 km/h 转换为 m/s
#[inline]
pub fn kmh_to_ms(kmh: f64) -> f64 {
    kmh / KMH_PER_MS
}

/// 将 m/s 转换为 km/h
#[inline]
pub fn ms_to_kmh(ms: f64) -> f64 {
    ms * KMH_PER_MS
}
