//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::SynthesisError;
use crate::domain::speech::SpeechConfigError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 语音参数无效（保留参数名与取值，供 HTTP 层生成字段错误列表）
    #[error(transparent)]
    InvalidParameter(#[from] SpeechConfigError),

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 外部服务错误
    #[error("External service error: {0}")]
    ExternalServiceError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}

impl From<SynthesisError> for ApplicationError {
    fn from(err: SynthesisError) -> Self {
        match err {
            SynthesisError::Unavailable(msg) => Self::ExternalServiceError(msg),
        }
    }
}
