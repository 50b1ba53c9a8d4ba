//! Speech Context - Errors

use thiserror::Error;

/// 语音参数校验错误
///
/// 两类错误需要区分：
/// - `TypeMismatch`: 调用方传入了非字符串的值（编程错误）
/// - `PatternMismatch`: 字符串格式不符合要求（用户输入错误）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeechConfigError {
    #[error("{parameter_name} must be str")]
    TypeMismatch { parameter_name: &'static str },

    #[error("Invalid {parameter_name} '{value}'.")]
    PatternMismatch {
        parameter_name: &'static str,
        value: String,
    },
}

impl SpeechConfigError {
    /// 出错的参数名
    pub fn parameter_name(&self) -> &'static str {
        match self {
            Self::TypeMismatch { parameter_name } => parameter_name,
            Self::PatternMismatch { parameter_name, .. } => parameter_name,
        }
    }

    /// 出错的参数值（仅格式错误携带）
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::TypeMismatch { .. } => None,
            Self::PatternMismatch { value, .. } => Some(value),
        }
    }

    /// 机器可读的错误类别
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TypeMismatch { .. } => "type_mismatch",
            Self::PatternMismatch { .. } => "pattern_mismatch",
        }
    }
}
