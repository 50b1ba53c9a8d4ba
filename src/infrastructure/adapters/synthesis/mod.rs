//! Synthesis Adapter - 合成子系统实现

mod deferred_synthesizer;

pub use deferred_synthesizer::{DeferredSynthesizer, DeferredSynthesizerConfig, PendingSynthesis};
