//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                GET   健康检查
//! - /api/speech/defaults     GET   默认语音参数
//! - /api/speech/validate     POST  规范化并校验语音参数
//! - /api/speech/synthesize   POST  校验并提交合成

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/speech", speech_routes())
}

/// Speech 路由
fn speech_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/defaults", get(handlers::get_speech_defaults))
        .route("/validate", post(handlers::validate_speech))
        .route("/synthesize", post(handlers::synthesize))
}
