//! Synthesis Port - 语音合成子系统抽象
//!
//! 校验通过的 SpeechConfig 经此端口交给合成子系统，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::speech::SpeechConfig;

/// 合成子系统错误
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("Synthesis service unavailable: {0}")]
    Unavailable(String),
}

/// 合成请求
///
/// config 已经过校验，下游无需再次校验
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    /// 要合成的文本
    pub text: String,
    /// 已校验的语音参数
    pub config: SpeechConfig,
}

/// 合成子系统受理回执
#[derive(Debug, Clone)]
pub struct SynthesisTicket {
    pub task_id: Uuid,
    /// 规范格式的音色标识
    pub voice: String,
    pub accepted_at: DateTime<Utc>,
}

/// Synthesis Port
#[async_trait]
pub trait SynthesisPort: Send + Sync {
    /// 提交合成请求
    async fn submit(&self, request: SynthesisRequest) -> Result<SynthesisTicket, SynthesisError>;

    /// 检查合成子系统是否可用
    async fn health_check(&self) -> bool {
        true // 默认实现
    }
}
