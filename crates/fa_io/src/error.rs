// crates/fa_io/src/error.rs

//! IO 错误类型定义
//!
//! 提供 IO 模块的统一错误枚举，支持通过 thiserror 自动转换底层错误。
//! 所有错误最终可转换为 FaError 以实现跨层错误传递。

use thiserror::Error;

use fa_foundation::FaError;

/// IO 模块结果类型别名
pub type IoResult<T> = Result<T, IoError>;

/// IO 错误枚举
#[derive(Error, Debug)]
pub enum IoError {
    /// 导入文本不是合法 JSON
    #[error("非法 JSON: {message}")]
    MalformedJson {
        /// 解析器给出的原因
        message: String,
    },

    /// 底层 IO 错误
    #[error("IO 错误: {message}")]
    Io {
        /// 描述性错误信息
        message: String,
        /// 底层错误
        #[source]
        source: std::io::Error,
    },

    /// 序列化失败
    #[error("序列化失败: {message}")]
    Serialization {
        /// 失败原因
        message: String,
    },

    /// 栅格化失败
    #[error("栅格化失败: {message}")]
    RasterizeFailed {
        /// 失败原因
        message: String,
    },

    /// 基础层错误转换
    #[error("基础层错误: {0}")]
    Foundation(#[from] FaError),
}

impl IoError {
    /// 非法 JSON
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::MalformedJson {
            message: message.into(),
        }
    }

    /// 带路径上下文的 IO 错误
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// 栅格化失败
    pub fn rasterize(message: impl Into<String>) -> Self {
        Self::RasterizeFailed {
            message: message.into(),
        }
    }
}

impl From<IoError> for FaError {
    fn from(err: IoError) -> Self {
        match err {
            IoError::MalformedJson { message } => {
                FaError::parse(format!("非法 JSON: {message}"))
            }
            IoError::Io { message, source } => FaError::io_with_source(message, source),
            IoError::Serialization { message } => FaError::serialization(message),
            IoError::RasterizeFailed { message } => {
                FaError::io(format!("栅格化失败: {message}"))
            }
            IoError::Foundation(fa_err) => fa_err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_json_display() {
        let err = IoError::malformed_json("expected value at line 1");
        assert!(err.to_string().contains("非法 JSON"));
    }

    #[test]
    fn test_into_fa_error() {
        let err: FaError = IoError::malformed_json("x").into();
        assert!(matches!(err, FaError::Parse { .. }));
    }
}
