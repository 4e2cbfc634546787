// crates/fa_model/src/error.rs

//! 模型层错误类型

use fa_foundation::FaError;

/// 模型层结果类型别名
pub type ModelResult<T> = Result<T, ModelError>;

/// 模型错误
///
/// 对单次计算致命，对进程非致命：调用方应拦截并以验证消息的形式呈现，
/// 不得让其导致进程崩溃。
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// 未知赛车型号
    #[error("未知赛车型号: '{name}' (已知型号: {known:?})")]
    UnknownCarProfile {
        /// 输入的型号标识
        name: String,
        /// 已知型号列表
        known: Vec<&'static str>,
    },

    /// 参数非有限
    #[error("参数非有限: {field}={value}")]
    NonFiniteParameter {
        /// 字段名
        field: &'static str,
        /// 实际值
        value: f64,
    },
}

impl ModelError {
    /// 未知赛车型号
    pub fn unknown_car(name: impl Into<String>) -> Self {
        Self::UnknownCarProfile {
            name: name.into(),
            known: crate::car::CarProfile::ALL
                .iter()
                .map(|c| c.display_name())
                .collect(),
        }
    }
}

impl From<ModelError> for FaError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::UnknownCarProfile { name, known } => {
                FaError::invalid_input(format!("未知赛车型号 '{name}' (已知: {known:?})"))
            }
            ModelError::NonFiniteParameter { field, value } => FaError::non_finite(field, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_car_display() {
        let err = ModelError::unknown_car("McLaren MCL60");
        let msg = err.to_string();
        assert!(msg.contains("McLaren MCL60"));
        assert!(msg.contains("Ferrari SF-23"));
    }

    #[test]
    fn test_into_fa_error() {
        let err: FaError = ModelError::unknown_car("X").into();
        assert!(matches!(err, FaError::InvalidInput { .. }));
    }
}
