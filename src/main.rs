//! Speechgate - TTS 请求参数网关
//!
//! - Domain: speech/ (Bounded Context)
//! - Application: commands, queries, ports
//! - Infrastructure: http, adapters

use std::sync::Arc;

use speechgate::config::{load_config, print_config};
use speechgate::infrastructure::adapters::{DeferredSynthesizer, DeferredSynthesizerConfig};
use speechgate::infrastructure::http::{AppState, HttpServer, ServerConfig};
use speechgate::infrastructure::worker::{SynthesisWorker, SynthesisWorkerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},speechgate={},tower_http=debug",
        config.log.level, config.log.level
    );
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));
    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    tracing::info!("Speechgate - TTS 请求参数网关");
    print_config(&config);

    // 默认语音参数（加载配置时已校验）
    let defaults = config.speech.to_speech_config()?;
    tracing::info!(voice = %defaults.voice(), "Default speech config ready");

    // 创建合成子系统
    let synthesizer = Arc::new(DeferredSynthesizer::new(DeferredSynthesizerConfig::default()));

    // 启动 Worker，持续取走已受理的请求
    let worker = SynthesisWorker::new(SynthesisWorkerConfig::default(), synthesizer.clone());
    tokio::spawn(worker.run());

    // 创建 HTTP 服务器
    let static_dir = config
        .server
        .static_files
        .enabled
        .then(|| config.server.static_files.dir.clone());
    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_cors_origins(config.server.cors_origins())
        .with_static_dir(static_dir);
    let state = AppState::new(defaults, synthesizer);

    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
