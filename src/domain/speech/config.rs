//! Speech Context - SpeechConfig

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::value_objects::check_pattern;
use super::{canonicalize_voice, validate_string_param, SpeechConfigError, SpeechParam};

/// 默认音色（短格式，构造时会被规范化）
pub const DEFAULT_VOICE: &str = "en-US-EmmaMultilingualNeural";
pub const DEFAULT_RATE: &str = "+0%";
pub const DEFAULT_VOLUME: &str = "+0%";
pub const DEFAULT_PITCH: &str = "+0Hz";

/// 未经校验的原始参数
///
/// 来自 JSON 请求体等弱类型来源，字段可能不是字符串
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSpeechParams {
    #[serde(default)]
    pub voice: Value,
    #[serde(default)]
    pub rate: Value,
    #[serde(default)]
    pub volume: Value,
    #[serde(default)]
    pub pitch: Value,
}

/// 已校验的 TTS 配置
///
/// 不变量:
/// - voice 为规范格式 `Microsoft Server Speech Text to Speech Voice (<lang>-<region>, <name>)`
/// - rate / volume 形如 `+10%`，pitch 形如 `+0Hz`
///
/// 只能通过校验构造（包括反序列化），构造后不可修改。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSpeechParams")]
pub struct SpeechConfig {
    voice: String,
    rate: String,
    volume: String,
    pitch: String,
}

impl SpeechConfig {
    /// 从字符串参数构造
    ///
    /// 先规范化 voice，再按 voice -> rate -> volume -> pitch 顺序校验，
    /// 返回第一个出错的参数。
    pub fn new(
        voice: impl AsRef<str>,
        rate: impl Into<String>,
        volume: impl Into<String>,
        pitch: impl Into<String>,
    ) -> Result<Self, SpeechConfigError> {
        let voice = canonicalize_voice(voice.as_ref()).into_owned();
        let (rate, volume, pitch) = (rate.into(), volume.into(), pitch.into());

        check_pattern(SpeechParam::Voice, &voice)?;
        check_pattern(SpeechParam::Rate, &rate)?;
        check_pattern(SpeechParam::Volume, &volume)?;
        check_pattern(SpeechParam::Pitch, &pitch)?;

        Ok(Self {
            voice,
            rate,
            volume,
            pitch,
        })
    }

    /// 从弱类型参数构造
    ///
    /// 非字符串值返回 `TypeMismatch`，其余语义与 [`SpeechConfig::new`] 相同。
    pub fn from_values(raw: &RawSpeechParams) -> Result<Self, SpeechConfigError> {
        let Value::String(voice) = &raw.voice else {
            return Err(SpeechConfigError::TypeMismatch {
                parameter_name: SpeechParam::Voice.as_str(),
            });
        };
        let voice = canonicalize_voice(voice);
        check_pattern(SpeechParam::Voice, &voice)?;

        let rate = validate_string_param(SpeechParam::Rate, &raw.rate)?;
        let volume = validate_string_param(SpeechParam::Volume, &raw.volume)?;
        let pitch = validate_string_param(SpeechParam::Pitch, &raw.pitch)?;

        Ok(Self {
            voice: voice.into_owned(),
            rate: rate.to_string(),
            volume: volume.to_string(),
            pitch: pitch.to_string(),
        })
    }

    pub fn voice(&self) -> &str {
        &self.voice
    }

    pub fn rate(&self) -> &str {
        &self.rate
    }

    pub fn volume(&self) -> &str {
        &self.volume
    }

    pub fn pitch(&self) -> &str {
        &self.pitch
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            voice: canonicalize_voice(DEFAULT_VOICE).into_owned(),
            rate: DEFAULT_RATE.to_string(),
            volume: DEFAULT_VOLUME.to_string(),
            pitch: DEFAULT_PITCH.to_string(),
        }
    }
}

impl TryFrom<RawSpeechParams> for SpeechConfig {
    type Error = SpeechConfigError;

    fn try_from(raw: RawSpeechParams) -> Result<Self, Self::Error> {
        Self::from_values(&raw)
    }
}

impl From<&SpeechConfig> for RawSpeechParams {
    fn from(config: &SpeechConfig) -> Self {
        Self {
            voice: Value::String(config.voice.clone()),
            rate: Value::String(config.rate.clone()),
            volume: Value::String(config.volume.clone()),
            pitch: Value::String(config.pitch.clone()),
        }
    }
}
