// crates/fa_io/src/lib.rs

//! F1Aero IO 层 (Layer 3)
//!
//! 将仿真参数与气动力序列桥接到外部表示。
//!
//! # 模块概览
//!
//! - [`exporters`]: CSV 导出与图表栅格化边界 (PNG 字节)
//! - [`import`]: JSON 配置导入导出
//! - [`error`]: IO 层错误类型
//!
//! # 错误策略
//!
//! 导入文本非法 JSON 时返回 [`IoError::MalformedJson`]，调用方
//! 必须就地拦截并记录日志，参数保持不变，绝不让其作为崩溃向上
//! 传播。导出路径为 fire-and-forget：失败即静默放弃，无重试。
//!
//! # 使用示例
//!
//! ```rust,ignore
//! use fa_io::exporters::CsvExporter;
//! use fa_io::import::parse_setup;
//!
//! let exporter = CsvExporter::new();
//! let csv = exporter.to_csv_string(&series);
//!
//! let patch = parse_setup(r#"{"angle": 30}"#)?;
//! store.apply_patch(&patch);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod exporters;
pub mod import;

/// 层级标识
pub const LAYER: u8 = 3;

pub use error::{IoError, IoResult};
pub use exporters::{csv_file_name, export_chart_image, png_file_name, ChartSurface, CsvExporter};
pub use import::{parse_setup, read_setup, setup_to_json, write_setup};
