//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 合成子系统端口定义
//! - commands: 校验 / 提交合成命令及处理器
//! - queries: 默认参数查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    handlers::{SubmitSpeechHandler, ValidateSpeechHandler},
    SpeechParamsInput, SubmitSpeech, ValidateSpeech,
};

pub use error::ApplicationError;

pub use ports::{SynthesisError, SynthesisPort, SynthesisRequest, SynthesisTicket};

pub use queries::{handlers::GetDefaultSpeechHandler, GetDefaultSpeech};
