//! HTTP Error Handling
//!
//! 把应用层错误映射为带字段错误列表的 JSON 响应

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;
use crate::domain::speech::SpeechConfigError;

/// 单个字段的校验错误
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub parameter: &'static str,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl From<&SpeechConfigError> for FieldError {
    fn from(err: &SpeechConfigError) -> Self {
        Self {
            parameter: err.parameter_name(),
            kind: err.kind(),
            value: err.value().map(str::to_string),
        }
    }
}

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub errno: i32,
    pub error: String,
    pub data: Option<Vec<FieldError>>,
}

impl ErrorResponse {
    pub fn new(errno: i32, error: impl Into<String>) -> Self {
        Self {
            errno,
            error: error.into(),
            data: None,
        }
    }

    pub fn with_fields(mut self, fields: Vec<FieldError>) -> Self {
        self.data = Some(fields);
        self
    }
}

/// 错误码定义
pub mod errno {
    pub const BAD_REQUEST: i32 = 400;
    pub const SERVICE_UNAVAILABLE: i32 = 503;
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 语音参数校验失败
    InvalidParameter(SpeechConfigError),
    BadRequest(String),
    ServiceUnavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, response) = match &self {
            ApiError::InvalidParameter(err) => {
                tracing::warn!(
                    errno = errno::BAD_REQUEST,
                    parameter = err.parameter_name(),
                    kind = err.kind(),
                    error = %err,
                    "Invalid speech parameter"
                );
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(errno::BAD_REQUEST, err.to_string())
                        .with_fields(vec![FieldError::from(err)]),
                )
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(errno = errno::BAD_REQUEST, error = %msg, "Bad request");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(errno::BAD_REQUEST, msg.clone()),
                )
            }
            ApiError::ServiceUnavailable(msg) => {
                tracing::error!(errno = errno::SERVICE_UNAVAILABLE, error = %msg, "Service unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorResponse::new(errno::SERVICE_UNAVAILABLE, msg.clone()),
                )
            }
        };

        (status, Json(response)).into_response()
    }
}

impl From<SpeechConfigError> for ApiError {
    fn from(e: SpeechConfigError) -> Self {
        ApiError::InvalidParameter(e)
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::InvalidParameter(err) => ApiError::InvalidParameter(err),
            ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
            ApplicationError::ExternalServiceError(msg) => ApiError::ServiceUnavailable(msg),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::BadRequest(format!("Invalid request body: {}", e))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::BadRequest(e.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_pattern_mismatch_response() {
        let err = ApiError::from(SpeechConfigError::PatternMismatch {
            parameter_name: "rate",
            value: "10%".to_string(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["errno"], 400);
        assert_eq!(body["error"], "Invalid rate '10%'.");
        assert_eq!(body["data"][0]["parameter"], "rate");
        assert_eq!(body["data"][0]["kind"], "pattern_mismatch");
        assert_eq!(body["data"][0]["value"], "10%");
    }

    #[tokio::test]
    async fn test_type_mismatch_response_has_no_value() {
        let err = ApiError::from(ApplicationError::from(SpeechConfigError::TypeMismatch {
            parameter_name: "pitch",
        }));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "pitch must be str");
        assert_eq!(body["data"][0]["kind"], "type_mismatch");
        assert!(body["data"][0].get("value").is_none());
    }

    #[tokio::test]
    async fn test_service_unavailable_response() {
        let err = ApiError::from(ApplicationError::ExternalServiceError("down".to_string()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = body_json(response).await;
        assert_eq!(body["errno"], 503);
        assert!(body["data"].is_null());
    }
}
