// crates/fa_io/src/import/setup_json.rs

//! JSON 配置导入导出
//!
//! 输入/输出形状 `{"speedKmh": number, "angle": number, "car": string}`，
//! 导入时所有字段可选（宽容合并，见 `fa_model::SetupPatch`）。
//!
//! 导入不校验 `car` 是否为已知型号：未知型号在下一次模型求值时
//! 才以 `UnknownCarProfile` 暴露。解析失败返回
//! [`IoError::MalformedJson`]，调用方就地拦截并记录日志，参数
//! 保持不变——此失败绝不向上传播为崩溃。

use std::path::Path;

use fa_model::{SetupPatch, SimulationParameters};

use crate::error::{IoError, IoResult};

/// 解析 JSON 配置文本为补丁
///
/// # 错误
///
/// - [`IoError::MalformedJson`]: 文本不是合法 JSON 或形状不符
pub fn parse_setup(input: &str) -> IoResult<SetupPatch> {
    serde_json::from_str(input).map_err(|e| IoError::malformed_json(e.to_string()))
}

/// 将完整参数序列化为 JSON 文本
pub fn setup_to_json(params: &SimulationParameters) -> IoResult<String> {
    serde_json::to_string_pretty(params).map_err(|e| IoError::Serialization {
        message: e.to_string(),
    })
}

/// 从文件读取配置补丁
pub fn read_setup(path: impl AsRef<Path>) -> IoResult<SetupPatch> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| IoError::io(format!("无法读取 {}", path.display()), e))?;
    parse_setup(&content)
}

/// 将完整参数写入文件
pub fn write_setup(path: impl AsRef<Path>, params: &SimulationParameters) -> IoResult<()> {
    let path = path.as_ref();
    let content = setup_to_json(params)?;
    std::fs::write(path, content)
        .map_err(|e| IoError::io(format!("写入 {} 失败", path.display()), e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fa_session::ParameterStore;

    #[test]
    fn test_parse_partial_setup() {
        let patch = parse_setup(r#"{"angle": 30}"#).unwrap();
        assert_eq!(patch.angle_deg, Some(30.0));
        assert_eq!(patch.speed_kmh, None);
        assert_eq!(patch.car, None);
    }

    #[test]
    fn test_parse_full_setup() {
        let patch =
            parse_setup(r#"{"speedKmh": 300, "angle": 30, "car": "Red Bull RB19"}"#).unwrap();
        assert_eq!(patch.speed_kmh, Some(300.0));
        assert_eq!(patch.car.as_deref(), Some("Red Bull RB19"));
    }

    #[test]
    fn test_malformed_json_is_local_error() {
        let result = parse_setup("not json");
        assert!(matches!(result, Err(IoError::MalformedJson { .. })));
    }

    #[test]
    fn test_malformed_json_leaves_store_unchanged() {
        // 失败就地拦截，参数保持不变，调用方继续运行
        let mut store = ParameterStore::new();
        let before = store.current().clone();

        if let Ok(patch) = parse_setup("not json") {
            store.apply_patch(&patch);
        }

        assert_eq!(store.current(), &before);
    }

    #[test]
    fn test_import_applies_only_angle() {
        // 宽容合并：{"angle":30} 只改角度
        let mut store = ParameterStore::new();
        let patch = parse_setup(r#"{"angle": 30}"#).unwrap();
        store.apply_patch(&patch);

        assert!((store.current().speed_kmh - 250.0).abs() < 1e-12);
        assert!((store.current().angle_deg - 30.0).abs() < 1e-12);
        assert_eq!(store.current().car, "Ferrari SF-23");
    }

    #[test]
    fn test_unknown_car_accepted_at_import() {
        // 导入不校验型号；失败延迟到模型求值
        let patch = parse_setup(r#"{"car": "Brawn BGP 001"}"#).unwrap();
        assert_eq!(patch.car.as_deref(), Some("Brawn BGP 001"));
    }

    #[test]
    fn test_setup_json_roundtrip() {
        let params = SimulationParameters::new(300.0, 30.0, "Red Bull RB19");
        let json = setup_to_json(&params).unwrap();

        let patch = parse_setup(&json).unwrap();
        let mut restored = SimulationParameters::default();
        patch.apply_to(&mut restored);

        assert_eq!(restored, params);
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = std::env::temp_dir().join("fa_io_setup_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("setup.json");

        let params = SimulationParameters::new(180.0, 20.0, "Mercedes W14");
        write_setup(&path, &params).unwrap();
        let patch = read_setup(&path).unwrap();

        assert_eq!(patch.speed_kmh, Some(180.0));
        assert_eq!(patch.car.as_deref(), Some("Mercedes W14"));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_read_setup_missing_file() {
        let result = read_setup("/nonexistent/fa_setup.json");
        assert!(matches!(result, Err(IoError::Io { .. })));
    }
}
