//! Domain Layer - 领域层
//!
//! 包含一个限界上下文:
//! - Speech Context: 语音参数规范化与校验

pub mod speech;
