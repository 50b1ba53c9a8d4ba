//! Speech Command Handlers

use std::sync::Arc;

use crate::application::commands::{SubmitSpeech, ValidateSpeech};
use crate::application::error::ApplicationError;
use crate::application::ports::{SynthesisPort, SynthesisRequest, SynthesisTicket};
use crate::domain::speech::SpeechConfig;

// ============================================================================
// ValidateSpeech
// ============================================================================

/// ValidateSpeech Handler
///
/// 只做规范化与校验，不提交合成
pub struct ValidateSpeechHandler {
    defaults: SpeechConfig,
}

impl ValidateSpeechHandler {
    pub fn new(defaults: SpeechConfig) -> Self {
        Self { defaults }
    }

    pub fn handle(&self, command: ValidateSpeech) -> Result<SpeechConfig, ApplicationError> {
        let raw = command.params.with_defaults(&self.defaults);
        let config = SpeechConfig::from_values(&raw)?;

        tracing::debug!(voice = %config.voice(), "Speech parameters validated");

        Ok(config)
    }
}

// ============================================================================
// SubmitSpeech
// ============================================================================

/// SubmitSpeech Handler
///
/// 校验通过后把 SpeechConfig 交给合成子系统
pub struct SubmitSpeechHandler {
    defaults: SpeechConfig,
    synthesizer: Arc<dyn SynthesisPort>,
}

impl SubmitSpeechHandler {
    pub fn new(defaults: SpeechConfig, synthesizer: Arc<dyn SynthesisPort>) -> Self {
        Self {
            defaults,
            synthesizer,
        }
    }

    pub async fn handle(&self, command: SubmitSpeech) -> Result<SynthesisTicket, ApplicationError> {
        if command.text.trim().is_empty() {
            return Err(ApplicationError::validation("text must not be empty"));
        }

        let raw = command.params.with_defaults(&self.defaults);
        let config = SpeechConfig::from_values(&raw)?;

        let ticket = self
            .synthesizer
            .submit(SynthesisRequest {
                text: command.text,
                config,
            })
            .await?;

        tracing::info!(
            task_id = %ticket.task_id,
            voice = %ticket.voice,
            "Speech submitted"
        );

        Ok(ticket)
    }
}
