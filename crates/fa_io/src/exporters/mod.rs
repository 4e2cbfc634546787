// crates/fa_io/src/exporters/mod.rs

//! 数据导出器
//!
//! - [`csv`]: 气动力序列的 CSV 文本导出
//! - [`chart`]: 图表栅格化边界（PNG 字节）

pub mod chart;
pub mod csv;

pub use chart::{export_chart_image, png_file_name, ChartSurface};
pub use csv::{csv_file_name, CsvExporter};
