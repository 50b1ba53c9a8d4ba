//! Data Transfer Objects

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::application::{SpeechParamsInput, SynthesisTicket};
use crate::domain::speech::SpeechConfig;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

/// 将 JSON 对象请求体解码为 DTO
///
/// 请求体必须是对象，数组等按位置解码的形式一律视为格式错误
pub fn decode_object<T: DeserializeOwned>(
    body: Map<String, Value>,
) -> Result<T, serde_json::Error> {
    serde_json::from_value(Value::Object(body))
}

// ============================================================================
// Speech DTOs
// ============================================================================

/// 语音参数请求体
///
/// 字段保持弱类型，类型错误由校验器统一报告
#[derive(Debug, Default, Deserialize)]
pub struct SpeechParamsRequest {
    #[serde(default)]
    pub voice: Option<Value>,
    #[serde(default)]
    pub rate: Option<Value>,
    #[serde(default)]
    pub volume: Option<Value>,
    #[serde(default)]
    pub pitch: Option<Value>,
}

impl From<SpeechParamsRequest> for SpeechParamsInput {
    fn from(req: SpeechParamsRequest) -> Self {
        Self {
            voice: req.voice,
            rate: req.rate,
            volume: req.volume,
            pitch: req.pitch,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SynthesizeRequest {
    pub text: String,
    #[serde(flatten)]
    pub params: SpeechParamsRequest,
}

#[derive(Debug, Serialize)]
pub struct SpeechConfigResponse {
    pub voice: String,
    pub rate: String,
    pub volume: String,
    pub pitch: String,
}

impl From<SpeechConfig> for SpeechConfigResponse {
    fn from(config: SpeechConfig) -> Self {
        Self {
            voice: config.voice().to_string(),
            rate: config.rate().to_string(),
            volume: config.volume().to_string(),
            pitch: config.pitch().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SynthesisTicketResponse {
    pub task_id: Uuid,
    pub voice: String,
    pub accepted_at: String,
}

impl From<SynthesisTicket> for SynthesisTicketResponse {
    fn from(ticket: SynthesisTicket) -> Self {
        Self {
            task_id: ticket.task_id,
            voice: ticket.voice,
            accepted_at: ticket.accepted_at.to_rfc3339(),
        }
    }
}
