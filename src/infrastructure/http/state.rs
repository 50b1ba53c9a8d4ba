//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    GetDefaultSpeechHandler, SubmitSpeechHandler, SynthesisPort, ValidateSpeechHandler,
};
use crate::domain::speech::SpeechConfig;

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub synthesizer: Arc<dyn SynthesisPort>,

    // ========== Command Handlers ==========
    pub validate_handler: ValidateSpeechHandler,
    pub submit_handler: SubmitSpeechHandler,

    // ========== Query Handlers ==========
    pub get_defaults_handler: GetDefaultSpeechHandler,
}

impl AppState {
    /// 创建应用状态
    ///
    /// `defaults` 为已校验的默认语音参数，用于补齐请求缺省字段
    pub fn new(defaults: SpeechConfig, synthesizer: Arc<dyn SynthesisPort>) -> Self {
        Self {
            synthesizer: synthesizer.clone(),
            validate_handler: ValidateSpeechHandler::new(defaults.clone()),
            submit_handler: SubmitSpeechHandler::new(defaults.clone(), synthesizer),
            get_defaults_handler: GetDefaultSpeechHandler::new(defaults),
        }
    }
}
