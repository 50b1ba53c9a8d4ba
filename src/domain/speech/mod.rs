//! Speech Context - 语音参数限界上下文
//!
//! 职责:
//! - 音色标识规范化（短格式 -> 规范格式）
//! - rate / volume / pitch 格式校验
//! - 产出保证有效的 SpeechConfig

mod config;
mod errors;
mod value_objects;

pub use config::{
    RawSpeechParams, SpeechConfig, DEFAULT_PITCH, DEFAULT_RATE, DEFAULT_VOICE, DEFAULT_VOLUME,
};
pub use errors::SpeechConfigError;
pub use value_objects::{canonicalize_voice, validate_string_param, SpeechParam, VOICE_PREFIX};
