// crates/fa_model/src/params.rs

//! 仿真参数与配置补丁
//!
//! `SimulationParameters` 是模型的全部输入；`SetupPatch` 是
//! 宽容合并（permissive merge）语义下的部分更新。
//!
//! JSON 字段名与配置文件格式保持一致：`speedKmh` / `angle` / `car`。

use serde::{Deserialize, Serialize};

use fa_foundation::{FaError, FaResult};

/// 尾翼角度的有效范围 [度]
pub const ANGLE_RANGE: (f64, f64) = (0.0, 45.0);

/// 仿真参数
///
/// `car` 保持为字符串：导入时不校验型号，未知型号在模型求值时
/// 才以 `UnknownCarProfile` 暴露（见 [`crate::car`] 模块说明）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// 当前车速 [km/h]
    #[serde(rename = "speedKmh")]
    pub speed_kmh: f64,
    /// 尾翼角度 [度]
    #[serde(rename = "angle")]
    pub angle_deg: f64,
    /// 赛车型号标识
    pub car: String,
}

impl SimulationParameters {
    /// 创建参数
    pub fn new(speed_kmh: f64, angle_deg: f64, car: impl Into<String>) -> Self {
        Self {
            speed_kmh,
            angle_deg,
            car: car.into(),
        }
    }

    /// 输入边界校验
    ///
    /// 模型本身接受任意有限角度；此校验属于输入边界，
    /// 供导入与命令行路径在参数进入存储前使用。
    pub fn validate(&self) -> FaResult<()> {
        FaError::check_finite("speed_kmh", self.speed_kmh)?;
        if self.speed_kmh <= 0.0 {
            return Err(FaError::invalid_input(format!(
                "speed_kmh 必须为正: {}",
                self.speed_kmh
            )));
        }
        FaError::check_finite("angle_deg", self.angle_deg)?;
        FaError::check_range("angle_deg", self.angle_deg, ANGLE_RANGE.0, ANGLE_RANGE.1)?;
        Ok(())
    }
}

impl Default for SimulationParameters {
    /// 会话初始参数
    fn default() -> Self {
        Self::new(250.0, 15.0, "Ferrari SF-23")
    }
}

/// 配置补丁（部分参数更新）
///
/// # 宽容合并语义
///
/// 仅当字段存在且"真值"（数值非零且有限、字符串非空）时才覆盖
/// 对应的存储字段，其余字段保持不变。因此 `{"angle": 0}` 不会把
/// 角度清零——这是对原始行为的有意保留，见 DESIGN.md。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetupPatch {
    /// 车速 [km/h]
    #[serde(rename = "speedKmh", default, skip_serializing_if = "Option::is_none")]
    pub speed_kmh: Option<f64>,
    /// 尾翼角度 [度]
    #[serde(rename = "angle", default, skip_serializing_if = "Option::is_none")]
    pub angle_deg: Option<f64>,
    /// 赛车型号标识
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car: Option<String>,
}

/// 数值字段的"真值"判定
#[inline]
fn effective_number(v: Option<f64>) -> Option<f64> {
    v.filter(|x| x.is_finite() && *x != 0.0)
}

impl SetupPatch {
    /// 从完整参数构造补丁（所有字段均有效）
    pub fn from_params(params: &SimulationParameters) -> Self {
        Self {
            speed_kmh: Some(params.speed_kmh),
            angle_deg: Some(params.angle_deg),
            car: Some(params.car.clone()),
        }
    }

    /// 按宽容合并语义应用到参数
    ///
    /// 返回实际被覆盖的字段数。
    pub fn apply_to(&self, params: &mut SimulationParameters) -> usize {
        let mut applied = 0;
        if let Some(v) = effective_number(self.speed_kmh) {
            params.speed_kmh = v;
            applied += 1;
        }
        if let Some(v) = effective_number(self.angle_deg) {
            params.angle_deg = v;
            applied += 1;
        }
        if let Some(car) = self.car.as_deref() {
            if !car.is_empty() {
                params.car = car.to_string();
                applied += 1;
            }
        }
        applied
    }

    /// 补丁是否不含任何有效字段
    pub fn is_empty(&self) -> bool {
        effective_number(self.speed_kmh).is_none()
            && effective_number(self.angle_deg).is_none()
            && self.car.as_deref().map_or(true, str::is_empty)
    }
}
