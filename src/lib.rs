//! Speechgate - TTS 请求参数网关
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Speech Context: 音色标识规范化、rate/volume/pitch 格式校验
//!
//! 应用层 (application/):
//! - Ports: SynthesisPort（合成子系统）
//! - Commands: 校验 / 提交合成
//! - Queries: 默认参数
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API，校验错误映射为 400 字段错误
//! - Adapters: DeferredSynthesizer

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::{load_config, AppConfig};
pub use domain::speech::{SpeechConfig, SpeechConfigError};
