// crates/fa_session/src/lib.rs

//! F1Aero 会话层 (Layer 3)
//!
//! 持有当前仿真参数与已存配置列表，并提供内置预设表。
//! 单写者模型：会话内只有一个逻辑写入方（用户驱动的前端线程），
//! 所有更新同步完成，无并发修改。
//!
//! # 模块概览
//!
//! - [`store`]: `ParameterStore` 参数存储与 `SavedConfiguration`
//! - [`presets`]: 内置预设表（进程启动时固定，不可变）
//! - [`error`]: 会话层错误类型
//!
//! # 生命周期
//!
//! 存储内容仅存活于进程内存中，无持久化；已存配置列表为
//! 追加式，不提供删除操作。

#![warn(missing_docs)]

pub mod error;
pub mod presets;
pub mod store;

/// 层级标识
pub const LAYER: u8 = 3;

pub use error::{SessionError, SessionResult};
pub use presets::{preset, preset_names};
pub use store::{ParameterStore, SavedConfiguration};
