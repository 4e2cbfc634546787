// crates/fa_foundation/src/lib.rs

//! F1Aero 基础层 (Layer 1)
//!
//! 提供整个项目共享的基础设施，不包含任何物理或业务语义。
//!
//! # 模块概览
//!
//! - [`error`]: `FaError` 统一错误类型与 `FaResult` 别名
//! - [`units`]: 速度单位转换 (km/h ↔ m/s)
//!
//! # 层级架构
//!
//! ```text
//! Layer 4: fa_cli        ─> 命令行应用
//! Layer 3: fa_session    ─> 参数存储 / fa_io 导入导出
//! Layer 2: fa_model      ─> 气动力模型（纯函数）
//! Layer 1: fa_foundation ─> 错误类型、单位转换 (本层)
//! ```
//!
//! # 设计原则
//!
//! 1. **无业务语义**: 本层不知道赛车、配置、导出格式的存在
//! 2. **错误层次化**: 各上层定义自己的错误枚举，最终可转换为 `FaError`

#![warn(missing_docs)]

pub mod error;
pub mod units;

/// 层级标识
pub const LAYER: u8 = 1;

pub use error::{FaError, FaResult};
