//! Speech Context - Value Objects
//!
//! 音色标识规范化与参数格式定义

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::SpeechConfigError;

/// 规范音色标识的固定前缀（与 Microsoft Edge 发送的格式一致）
pub const VOICE_PREFIX: &str = "Microsoft Server Speech Text to Speech Voice";

/// 短格式: `<lang>-<REGION>-<name>Neural`
static SHORT_VOICE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-z]{2,})-([A-Z]{2,})-(.+Neural)$").unwrap());

static VOICE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Microsoft Server Speech Text to Speech Voice \(.+,.+\)$").unwrap()
});

// rate 与 volume 共用同一格式
static PERCENT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]\d+%$").unwrap());

static HERTZ_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]\d+Hz$").unwrap());

/// 需要校验的参数
///
/// 校验顺序固定为 `ALL` 的顺序，遇到第一个错误即停止
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpeechParam {
    Voice,
    Rate,
    Volume,
    Pitch,
}

impl SpeechParam {
    pub const ALL: [SpeechParam; 4] = [Self::Voice, Self::Rate, Self::Volume, Self::Pitch];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Voice => "voice",
            Self::Rate => "rate",
            Self::Volume => "volume",
            Self::Pitch => "pitch",
        }
    }

    /// 参数对应的格式（整串匹配）
    pub fn pattern(&self) -> &'static Regex {
        match self {
            Self::Voice => &VOICE_PATTERN,
            Self::Rate | Self::Volume => &PERCENT_PATTERN,
            Self::Pitch => &HERTZ_PATTERN,
        }
    }
}

impl std::fmt::Display for SpeechParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 将短格式音色标识改写为规范格式
///
/// - `cy-GB-NiaNeural` -> `Microsoft Server Speech Text to Speech Voice (cy-GB, NiaNeural)`
/// - name 部分含 `-` 时，第一个 `-` 之前的部分并入 region
///   （`xx-YY-Sub-PartNeural` -> `(xx-YY-Sub, PartNeural)`）
/// - 不匹配短格式的输入原样返回，交由后续校验处理
///
/// 纯字符串改写，不查询真实音色列表。
pub fn canonicalize_voice(voice: &str) -> Cow<'_, str> {
    let Some(caps) = SHORT_VOICE_PATTERN.captures(voice) else {
        return Cow::Borrowed(voice);
    };

    let lang = &caps[1];
    let mut region = caps[2].to_string();
    let mut name = &caps[3];

    if let Some((variant, rest)) = name.split_once('-') {
        region.push('-');
        region.push_str(variant);
        name = rest;
    }

    Cow::Owned(format!("{VOICE_PREFIX} ({lang}-{region}, {name})"))
}

/// 校验单个参数：先检查类型，再检查格式
pub fn validate_string_param(
    param: SpeechParam,
    value: &Value,
) -> Result<&str, SpeechConfigError> {
    let Value::String(s) = value else {
        return Err(SpeechConfigError::TypeMismatch {
            parameter_name: param.as_str(),
        });
    };
    check_pattern(param, s)?;
    Ok(s)
}

/// 仅检查格式（调用方已保证是字符串）
pub(super) fn check_pattern(param: SpeechParam, value: &str) -> Result<(), SpeechConfigError> {
    if param.pattern().is_match(value) {
        Ok(())
    } else {
        Err(SpeechConfigError::PatternMismatch {
            parameter_name: param.as_str(),
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_canonicalize_short_form() {
        assert_eq!(
            canonicalize_voice("cy-GB-NiaNeural"),
            "Microsoft Server Speech Text to Speech Voice (cy-GB, NiaNeural)"
        );
        assert_eq!(
            canonicalize_voice("fil-PH-AngeloNeural"),
            "Microsoft Server Speech Text to Speech Voice (fil-PH, AngeloNeural)"
        );
    }

    #[test]
    fn test_canonicalize_hyphenated_name_extends_region() {
        assert_eq!(
            canonicalize_voice("xx-YY-Sub-PartNeural"),
            "Microsoft Server Speech Text to Speech Voice (xx-YY-Sub, PartNeural)"
        );
        // 只按第一个 '-' 切分
        assert_eq!(
            canonicalize_voice("zh-CN-liaoning-Xiao-BeiNeural"),
            "Microsoft Server Speech Text to Speech Voice (zh-CN-liaoning, Xiao-BeiNeural)"
        );
    }

    #[test]
    fn test_canonicalize_passthrough() {
        let canonical = "Microsoft Server Speech Text to Speech Voice (en-US, AriaNeural)";
        assert!(matches!(canonicalize_voice(canonical), Cow::Borrowed(_)));
        assert_eq!(canonicalize_voice(canonical), canonical);

        // 不满足短格式的输入不改写
        assert_eq!(canonicalize_voice("EN-US-AriaNeural"), "EN-US-AriaNeural");
        assert_eq!(canonicalize_voice("en-us-AriaNeural"), "en-us-AriaNeural");
        assert_eq!(canonicalize_voice("en-US-Aria"), "en-US-Aria");
        assert_eq!(canonicalize_voice("en-US-Neural"), "en-US-Neural");
        assert_eq!(canonicalize_voice(""), "");
    }

    #[test]
    fn test_canonicalize_is_idempotent() {
        for input in [
            "cy-GB-NiaNeural",
            "fil-PH-AngeloNeural",
            "xx-YY-Sub-PartNeural",
            "en-US-EmmaMultilingualNeural",
        ] {
            let once = canonicalize_voice(input).into_owned();
            let twice = canonicalize_voice(&once).into_owned();
            assert_eq!(once, twice, "input: {input}");
        }
    }

    #[test]
    fn test_patterns() {
        let cases = [
            (SpeechParam::Rate, "+10%", true),
            (SpeechParam::Rate, "-0%", true),
            (SpeechParam::Rate, "10%", false),
            (SpeechParam::Rate, "+10", false),
            (SpeechParam::Rate, "-5.5%", false),
            (SpeechParam::Rate, "+10%\n", false),
            (SpeechParam::Volume, "-20%", true),
            (SpeechParam::Volume, "20%", false),
            (SpeechParam::Pitch, "+0Hz", true),
            (SpeechParam::Pitch, "-50Hz", true),
            (SpeechParam::Pitch, "0Hz", false),
            (SpeechParam::Pitch, "+0hz", false),
            (
                SpeechParam::Voice,
                "Microsoft Server Speech Text to Speech Voice (en-US, AriaNeural)",
                true,
            ),
            (SpeechParam::Voice, "en-US-AriaNeural", false),
            (
                SpeechParam::Voice,
                "Microsoft Server Speech Text to Speech Voice (en-US AriaNeural)",
                false,
            ),
        ];

        for (param, value, expected) in cases {
            assert_eq!(
                param.pattern().is_match(value),
                expected,
                "{param} = {value:?}"
            );
        }
    }

    #[test]
    fn test_empty_string_never_matches() {
        for param in SpeechParam::ALL {
            let err = validate_string_param(param, &json!("")).unwrap_err();
            assert_eq!(
                err,
                SpeechConfigError::PatternMismatch {
                    parameter_name: param.as_str(),
                    value: String::new(),
                }
            );
        }
    }

    #[test]
    fn test_non_string_is_type_mismatch() {
        for value in [json!(0), json!(null), json!(true), json!(["+0Hz"])] {
            let err = validate_string_param(SpeechParam::Pitch, &value).unwrap_err();
            assert_eq!(
                err,
                SpeechConfigError::TypeMismatch {
                    parameter_name: "pitch"
                }
            );
        }
    }

    #[test]
    fn test_valid_string_is_returned() {
        let value = json!("+5%");
        assert_eq!(
            validate_string_param(SpeechParam::Volume, &value).unwrap(),
            "+5%"
        );
    }
}
