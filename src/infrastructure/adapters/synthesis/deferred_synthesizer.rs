//! Deferred Synthesizer - 进程内合成子系统
//!
//! 只登记已受理的请求并签发回执，不产生音频、不访问网络。
//! 真正的合成由下游消费者取走已登记的请求后完成。

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::application::ports::{SynthesisError, SynthesisPort, SynthesisRequest, SynthesisTicket};

/// 已受理的合成请求
#[derive(Debug, Clone)]
pub struct PendingSynthesis {
    pub ticket: SynthesisTicket,
    pub request: SynthesisRequest,
}

/// Deferred Synthesizer 配置
#[derive(Debug, Clone)]
pub struct DeferredSynthesizerConfig {
    /// 最多保留的待处理请求数
    pub max_pending: usize,
}

impl Default for DeferredSynthesizerConfig {
    fn default() -> Self {
        Self { max_pending: 1000 }
    }
}

/// Deferred Synthesizer
pub struct DeferredSynthesizer {
    config: DeferredSynthesizerConfig,
    pending: RwLock<Vec<PendingSynthesis>>,
}

impl DeferredSynthesizer {
    pub fn new(config: DeferredSynthesizerConfig) -> Self {
        Self {
            config,
            pending: RwLock::new(Vec::new()),
        }
    }

    /// 使用默认配置创建
    pub fn with_defaults() -> Self {
        Self::new(DeferredSynthesizerConfig::default())
    }

    /// 当前待处理请求数
    pub async fn pending_count(&self) -> usize {
        self.pending.read().await.len()
    }

    /// 取走所有待处理请求
    pub async fn drain(&self) -> Vec<PendingSynthesis> {
        std::mem::take(&mut *self.pending.write().await)
    }
}

#[async_trait]
impl SynthesisPort for DeferredSynthesizer {
    async fn submit(&self, request: SynthesisRequest) -> Result<SynthesisTicket, SynthesisError> {
        let mut pending = self.pending.write().await;
        if pending.len() >= self.config.max_pending {
            tracing::warn!(
                max_pending = self.config.max_pending,
                "DeferredSynthesizer: queue full"
            );
            return Err(SynthesisError::Unavailable(format!(
                "too many pending requests (max {})",
                self.config.max_pending
            )));
        }

        let ticket = SynthesisTicket {
            task_id: Uuid::new_v4(),
            voice: request.config.voice().to_string(),
            accepted_at: Utc::now(),
        };

        tracing::debug!(
            task_id = %ticket.task_id,
            text_len = request.text.len(),
            voice = %request.config.voice(),
            rate = %request.config.rate(),
            volume = %request.config.volume(),
            pitch = %request.config.pitch(),
            "DeferredSynthesizer: request accepted"
        );

        pending.push(PendingSynthesis {
            ticket: ticket.clone(),
            request,
        });

        Ok(ticket)
    }

    async fn health_check(&self) -> bool {
        self.pending.read().await.len() < self.config.max_pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::speech::SpeechConfig;

    fn request(text: &str) -> SynthesisRequest {
        SynthesisRequest {
            text: text.to_string(),
            config: SpeechConfig::default(),
        }
    }

    #[tokio::test]
    async fn test_submit_records_request() {
        let synthesizer = DeferredSynthesizer::with_defaults();
        let ticket = synthesizer.submit(request("hello")).await.unwrap();

        assert_eq!(ticket.voice, SpeechConfig::default().voice());
        assert_eq!(synthesizer.pending_count().await, 1);

        let drained = synthesizer.drain().await;
        assert_eq!(drained.len(), 1);
        assert_eq!(drained[0].ticket.task_id, ticket.task_id);
        assert_eq!(drained[0].request.text, "hello");
        assert_eq!(synthesizer.pending_count().await, 0);
    }

    #[tokio::test]
    async fn test_submit_fails_when_full() {
        let synthesizer = DeferredSynthesizer::new(DeferredSynthesizerConfig { max_pending: 1 });
        synthesizer.submit(request("one")).await.unwrap();

        assert!(!synthesizer.health_check().await);
        let err = synthesizer.submit(request("two")).await.unwrap_err();
        assert!(matches!(err, SynthesisError::Unavailable(_)));
    }
}
