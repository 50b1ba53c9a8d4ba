//! Synthesis Worker - 消费已受理的合成请求
//!
//! 定期取走 DeferredSynthesizer 中的待处理请求，保证队列不会长期占满

use std::sync::Arc;
use std::time::Duration;

use crate::infrastructure::adapters::DeferredSynthesizer;

/// Worker 配置
#[derive(Debug, Clone)]
pub struct SynthesisWorkerConfig {
    /// 取队列的间隔
    pub poll_interval: Duration,
}

impl Default for SynthesisWorkerConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(200),
        }
    }
}

/// 合成 Worker
pub struct SynthesisWorker {
    config: SynthesisWorkerConfig,
    synthesizer: Arc<DeferredSynthesizer>,
}

impl SynthesisWorker {
    pub fn new(config: SynthesisWorkerConfig, synthesizer: Arc<DeferredSynthesizer>) -> Self {
        Self {
            config,
            synthesizer,
        }
    }

    /// 启动 Worker
    pub async fn run(self) {
        tracing::info!(
            poll_interval_ms = self.config.poll_interval.as_millis() as u64,
            "SynthesisWorker started"
        );

        let mut interval = tokio::time::interval(self.config.poll_interval);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            self.process_pending().await;
        }
    }

    /// 取走并处理当前所有待处理请求，返回处理数量
    pub async fn process_pending(&self) -> usize {
        let pending = self.synthesizer.drain().await;

        for item in &pending {
            tracing::info!(
                task_id = %item.ticket.task_id,
                text_len = item.request.text.len(),
                voice = %item.request.config.voice(),
                rate = %item.request.config.rate(),
                volume = %item.request.config.volume(),
                pitch = %item.request.config.pitch(),
                "Synthesis request dispatched"
            );
        }

        pending.len()
    }
}
