//! Worker - 后台任务处理

mod synthesis_worker;

pub use synthesis_worker::{SynthesisWorker, SynthesisWorkerConfig};
