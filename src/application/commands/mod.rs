//! 应用层 - 命令
//!
//! CQRS 命令侧：校验语音参数、提交合成

mod speech_commands;

pub mod handlers;

pub use speech_commands::*;
