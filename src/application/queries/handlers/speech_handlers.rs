//! Speech Query Handlers

use crate::application::queries::GetDefaultSpeech;
use crate::domain::speech::SpeechConfig;

/// GetDefaultSpeech Handler
pub struct GetDefaultSpeechHandler {
    defaults: SpeechConfig,
}

impl GetDefaultSpeechHandler {
    pub fn new(defaults: SpeechConfig) -> Self {
        Self { defaults }
    }

    pub fn handle(&self, _query: GetDefaultSpeech) -> SpeechConfig {
        self.defaults.clone()
    }
}
