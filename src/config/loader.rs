//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{AppConfig, SpeechDefaults};
use crate::domain::speech::{SpeechConfig, SpeechConfigError};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    #[error("Invalid default speech parameter: {0}")]
    InvalidSpeechDefault(#[from] SpeechConfigError),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

impl SpeechDefaults {
    /// 校验并规范化默认语音参数
    pub fn to_speech_config(&self) -> Result<SpeechConfig, SpeechConfigError> {
        SpeechConfig::new(&self.voice, &self.rate, &self.volume, &self.pitch)
    }
}

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `SPEECHGATE_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `SPEECHGATE_SERVER__PORT=8080`
/// - `SPEECHGATE_SERVER__CORS_ALLOWED_ORIGINS=http://localhost:3000`
/// - `SPEECHGATE_SPEECH__VOICE=cy-GB-NiaNeural`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let defaults = SpeechDefaults::default();
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("server.cors_allowed_origins", "")?
        .set_default("server.static_files.enabled", false)?
        .set_default("server.static_files.dir", "public")?
        .set_default("speech.voice", defaults.voice)?
        .set_default("speech.rate", defaults.rate)?
        .set_default("speech.volume", defaults.volume)?
        .set_default("speech.pitch", defaults.pitch)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: SPEECHGATE_SPEECH__RATE=+10%
    builder = builder.add_source(
        Environment::with_prefix("SPEECHGATE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.server.static_files.enabled && config.server.static_files.dir.as_os_str().is_empty()
    {
        return Err(ConfigError::ValidationError(
            "Static files directory cannot be empty when enabled".to_string(),
        ));
    }

    // 默认语音参数必须本身合法
    config.speech.to_speech_config()?;

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    let origins = config.server.cors_origins();
    if origins.is_empty() {
        tracing::info!("CORS Allowed Origins: *");
    } else {
        tracing::info!("CORS Allowed Origins: {}", origins.join(", "));
    }
    if config.server.static_files.enabled {
        tracing::info!("Static Files: {:?}", config.server.static_files.dir);
    }
    tracing::info!("Default Voice: {}", config.speech.voice);
    tracing::info!(
        "Default Rate/Volume/Pitch: {} / {} / {}",
        config.speech.rate,
        config.speech.volume,
        config.speech.pitch
    );
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_validation_passes_for_default_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validation_error_for_invalid_speech_default() {
        let mut config = AppConfig::default();
        config.speech.pitch = "0Hz".to_string();
        let err = validate_config(&config).unwrap_err();
        match err {
            ConfigError::InvalidSpeechDefault(inner) => {
                assert_eq!(inner.parameter_name(), "pitch");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_speech_defaults_are_canonicalized() {
        let config = AppConfig::default();
        let speech = config.speech.to_speech_config().unwrap();
        assert_eq!(
            speech.voice(),
            "Microsoft Server Speech Text to Speech Voice (en-US, EmmaMultilingualNeural)"
        );
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config(
            r#"
[server]
port = 9000
cors_allowed_origins = "http://localhost:3000"

[speech]
voice = "cy-GB-NiaNeural"
pitch = "-5Hz"
"#,
        );

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.cors_origins(), vec!["http://localhost:3000"]);
        assert_eq!(config.speech.voice, "cy-GB-NiaNeural");
        assert_eq!(config.speech.pitch, "-5Hz");
        assert_eq!(config.speech.volume, "+0%");
    }

    #[test]
    fn test_env_overrides_file() {
        // 只有本测试使用 SPEECH__RATE，避免与其他并行测试互相影响
        let file = write_config(
            r#"
[speech]
rate = "+10%"
"#,
        );

        std::env::set_var("SPEECHGATE_SPEECH__RATE", "-20%");
        let result = load_config_from_path(Some(file.path()));
        std::env::remove_var("SPEECHGATE_SPEECH__RATE");

        let config = result.unwrap();
        assert_eq!(config.speech.rate, "-20%");
        assert_eq!(config.speech.to_speech_config().unwrap().rate(), "-20%");
    }

    #[test]
    fn test_load_from_file_rejects_bad_speech_default() {
        let file = write_config(
            r#"
[speech]
volume = "loud"
"#,
        );

        let err = load_config_from_path(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSpeechDefault(_)));
    }
}
