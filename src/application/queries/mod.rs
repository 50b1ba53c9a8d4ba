//! 应用层 - 查询
//!
//! CQRS 查询侧

mod speech_queries;

pub mod handlers;

pub use speech_queries::*;
