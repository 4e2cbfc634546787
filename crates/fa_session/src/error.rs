// crates/fa_session/src/error.rs

//! 会话层错误类型

use fa_foundation::FaError;

/// 会话层结果类型别名
pub type SessionResult<T> = Result<T, SessionError>;

/// 会话错误
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// 配置名为空
    #[error("配置名为空: 名称去除首尾空白后不能为空")]
    EmptyName,

    /// 已存配置未找到
    #[error("已存配置未找到: '{name}'")]
    SavedConfigNotFound {
        /// 查找的配置名
        name: String,
    },
}

impl From<SessionError> for FaError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::EmptyName => FaError::validation("配置名为空"),
            SessionError::SavedConfigNotFound { name } => FaError::not_found(name),
        }
    }
}
