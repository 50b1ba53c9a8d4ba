//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::speech::{DEFAULT_PITCH, DEFAULT_RATE, DEFAULT_VOICE, DEFAULT_VOLUME};

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 默认语音参数
    #[serde(default)]
    pub speech: SpeechDefaults,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 允许的跨域来源，逗号分隔；为空时允许任意来源
    #[serde(default)]
    pub cors_allowed_origins: String,

    /// 静态文件服务配置
    #[serde(default)]
    pub static_files: StaticFilesConfig,
}

/// 静态文件服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    /// 是否启用静态文件服务
    #[serde(default = "default_static_enabled")]
    pub enabled: bool,

    /// 静态文件目录
    #[serde(default = "default_static_dir")]
    pub dir: PathBuf,
}

fn default_static_enabled() -> bool {
    false
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("public")
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            enabled: default_static_enabled(),
            dir: default_static_dir(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_allowed_origins: String::new(),
            static_files: StaticFilesConfig::default(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// 解析跨域来源列表，空列表表示允许任意来源
    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// 默认语音参数
///
/// 请求未提供的字段使用这里的值；加载时会按 SpeechConfig 规则校验
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechDefaults {
    #[serde(default = "default_voice")]
    pub voice: String,

    #[serde(default = "default_rate")]
    pub rate: String,

    #[serde(default = "default_volume")]
    pub volume: String,

    #[serde(default = "default_pitch")]
    pub pitch: String,
}

fn default_voice() -> String {
    DEFAULT_VOICE.to_string()
}

fn default_rate() -> String {
    DEFAULT_RATE.to_string()
}

fn default_volume() -> String {
    DEFAULT_VOLUME.to_string()
}

fn default_pitch() -> String {
    DEFAULT_PITCH.to_string()
}

impl Default for SpeechDefaults {
    fn default() -> Self {
        Self {
            voice: default_voice(),
            rate: default_rate(),
            volume: default_volume(),
            pitch: default_pitch(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
