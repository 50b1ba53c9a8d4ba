//! Speech Queries

/// 获取默认语音参数查询
#[derive(Debug, Clone)]
pub struct GetDefaultSpeech;
