//! Speech Commands

use serde_json::Value;

use crate::domain::speech::{RawSpeechParams, SpeechConfig};

/// 调用方提供的语音参数
///
/// 缺省字段使用配置中的默认值
#[derive(Debug, Clone, Default)]
pub struct SpeechParamsInput {
    pub voice: Option<Value>,
    pub rate: Option<Value>,
    pub volume: Option<Value>,
    pub pitch: Option<Value>,
}

impl SpeechParamsInput {
    /// 用默认配置补齐缺省字段
    pub fn with_defaults(self, defaults: &SpeechConfig) -> RawSpeechParams {
        let fallback = RawSpeechParams::from(defaults);
        RawSpeechParams {
            voice: self.voice.unwrap_or(fallback.voice),
            rate: self.rate.unwrap_or(fallback.rate),
            volume: self.volume.unwrap_or(fallback.volume),
            pitch: self.pitch.unwrap_or(fallback.pitch),
        }
    }
}

/// 校验语音参数命令
#[derive(Debug, Clone)]
pub struct ValidateSpeech {
    pub params: SpeechParamsInput,
}

/// 提交合成命令
#[derive(Debug, Clone)]
pub struct SubmitSpeech {
    pub text: String,
    pub params: SpeechParamsInput,
}
