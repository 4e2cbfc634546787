// crates/fa_session/src/store.rs

//! 参数存储
//!
//! `ParameterStore` 独占持有当前仿真参数与已存配置列表。
//! 展示层通过引用访问，不存在环境全局变量。
//!
//! # 操作语义
//!
//! - 单字段更新 (`set_speed` / `set_angle` / `set_car`)：只替换一个
//!   字段，写入时不做跨字段校验
//! - `save_current`：名称去空白后为空则报 `EmptyName`；不强制名称
//!   唯一（列表为追加式，允许重复）
//! - `apply_patch`：宽容合并，见 [`SetupPatch`] 的语义说明

use serde::{Deserialize, Serialize};
use tracing::debug;

use fa_model::{SetupPatch, SimulationParameters};

use crate::error::{SessionError, SessionResult};

/// 已存配置
///
/// 仅存活于进程内存中；无删除操作。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedConfiguration {
    /// 配置名（去空白后非空）
    pub name: String,
    /// 保存时的参数快照
    #[serde(rename = "config")]
    pub params: SimulationParameters,
}

/// 参数存储
#[derive(Debug, Clone)]
pub struct ParameterStore {
    current: SimulationParameters,
    saved: Vec<SavedConfiguration>,
}

impl ParameterStore {
    /// 创建带默认参数与默认已存配置的存储
    pub fn new() -> Self {
        Self {
            current: SimulationParameters::default(),
            saved: default_saved_configurations(),
        }
    }

    /// 创建空存储（无默认已存配置）
    pub fn with_params(params: SimulationParameters) -> Self {
        Self {
            current: params,
            saved: Vec::new(),
        }
    }

    /// 当前参数
    pub fn current(&self) -> &SimulationParameters {
        &self.current
    }

    /// 已存配置列表
    pub fn saved(&self) -> &[SavedConfiguration] {
        &self.saved
    }

    /// 设置车速 [km/h]
    pub fn set_speed(&mut self, kmh: f64) {
        self.current.speed_kmh = kmh;
    }

    /// 设置尾翼角度 [度]
    pub fn set_angle(&mut self, deg: f64) {
        self.current.angle_deg = deg;
    }

    /// 设置赛车型号
    pub fn set_car(&mut self, car: impl Into<String>) {
        self.current.car = car.into();
    }

    /// 保存当前参数为命名配置
    ///
    /// # 错误
    ///
    /// - [`SessionError::EmptyName`]: 名称去除首尾空白后为空
    pub fn save_current(&mut self, name: &str) -> SessionResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SessionError::EmptyName);
        }
        self.saved.push(SavedConfiguration {
            name: name.to_string(),
            params: self.current.clone(),
        });
        debug!("已保存配置 '{}' (共 {} 条)", name, self.saved.len());
        Ok(())
    }

    /// 按宽容合并语义应用补丁
    ///
    /// 返回实际被覆盖的字段数。
    pub fn apply_patch(&mut self, patch: &SetupPatch) -> usize {
        let applied = patch.apply_to(&mut self.current);
        debug!("应用补丁: {} 个字段被覆盖", applied);
        applied
    }

    /// 将已存配置应用回当前参数
    ///
    /// 同名配置存在多条时取第一条（与追加式列表的查找语义一致）。
    ///
    /// # 错误
    ///
    /// - [`SessionError::SavedConfigNotFound`]: 名称不在列表中
    pub fn load_saved(&mut self, name: &str) -> SessionResult<()> {
        let config = self
            .saved
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| SessionError::SavedConfigNotFound {
                name: name.to_string(),
            })?;
        self.current = config.params.clone();
        Ok(())
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}

/// 内置的三条示例配置
fn default_saved_configurations() -> Vec<SavedConfiguration> {
    vec![
        SavedConfiguration {
            name: "Balanced Setup".to_string(),
            params: SimulationParameters::new(220.0, 18.0, "Ferrari SF-23"),
        },
        SavedConfiguration {
            name: "Straight Line Max".to_string(),
            params: SimulationParameters::new(320.0, 5.0, "Mercedes W14"),
        },
        SavedConfiguration {
            name: "Rain Race".to_string(),
            params: SimulationParameters::new(160.0, 25.0, "Red Bull RB19"),
        },
    ]
}
