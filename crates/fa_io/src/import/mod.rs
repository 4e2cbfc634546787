// crates/fa_io/src/import/mod.rs

//! 配置导入导出
//!
//! - [`setup_json`]: JSON 配置文本解析与文件读写

pub mod setup_json;

pub use setup_json::{parse_setup, read_setup, setup_to_json, write_setup};
