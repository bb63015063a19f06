//! 统一错误处理
//!
//! 表达式重写本身不会失败：不匹配的节点原样透传。
//! 错误只来自外围操作，包括配置加载、JSON 表达式树解析和日志初始化。

use thiserror::Error;

/// 重写模块错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RewriteError {
    #[error("无效参数: {0}")]
    InvalidArgument(String),

    #[error("配置错误: {0}")]
    Config(String),

    #[error("IO错误: {0}")]
    Io(String),

    #[error("序列化错误: {0}")]
    Serialization(String),
}

/// 统一的结果类型
pub type RewriteResult<T> = Result<T, RewriteError>;

// ==================== 外部错误转换实现 ====================

impl From<std::io::Error> for RewriteError {
    fn from(err: std::io::Error) -> Self {
        RewriteError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for RewriteError {
    fn from(err: toml::de::Error) -> Self {
        RewriteError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for RewriteError {
    fn from(err: toml::ser::Error) -> Self {
        RewriteError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for RewriteError {
    fn from(err: serde_json::Error) -> Self {
        RewriteError::Serialization(err.to_string())
    }
}

impl From<flexi_logger::FlexiLoggerError> for RewriteError {
    fn from(err: flexi_logger::FlexiLoggerError) -> Self {
        RewriteError::Config(err.to_string())
    }
}
