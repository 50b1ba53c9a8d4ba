//! Speech HTTP Handlers

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::application::{GetDefaultSpeech, SubmitSpeech, ValidateSpeech};
use crate::infrastructure::http::dto::{
    decode_object, ApiResponse, SpeechConfigResponse, SpeechParamsRequest, SynthesisTicketResponse,
    SynthesizeRequest,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 默认语音参数
pub async fn get_speech_defaults(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<SpeechConfigResponse>> {
    let defaults = state.get_defaults_handler.handle(GetDefaultSpeech);
    Json(ApiResponse::success(defaults.into()))
}

/// 规范化并校验语音参数
pub async fn validate_speech(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<ApiResponse<SpeechConfigResponse>>, ApiError> {
    let Json(body) = payload?;
    let req: SpeechParamsRequest = decode_object(body)?;

    let config = state.validate_handler.handle(ValidateSpeech {
        params: req.into(),
    })?;

    Ok(Json(ApiResponse::success(config.into())))
}

/// 校验语音参数并提交合成
pub async fn synthesize(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<ApiResponse<SynthesisTicketResponse>>, ApiError> {
    let Json(body) = payload?;
    let req: SynthesizeRequest = decode_object(body)?;

    let ticket = state
        .submit_handler
        .handle(SubmitSpeech {
            text: req.text,
            params: req.params.into(),
        })
        .await?;

    Ok(Json(ApiResponse::success(ticket.into())))
}
