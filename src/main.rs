//! Gambar Relay - Telegram 文生图中继
//!
//! 收到文本 → 调用推理服务 → 把图片发回同一个聊天

use std::sync::Arc;

use anyhow::Context;
use teloxide::Bot;

use gambar_relay::application::GenerateImageHandler;
use gambar_relay::config::{load_config, print_config};
use gambar_relay::infrastructure::adapters::{
    FileArtifactStorage, HttpImageClient, HttpImageClientConfig,
};
use gambar_relay::infrastructure::events::TracingEventLog;
use gambar_relay::infrastructure::http::{HealthServer, ServerConfig};
use gambar_relay::infrastructure::telegram::{
    run_dispatcher, verify_bot, ChatListener, TelegramReplier,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：部署环境变量 > RELAY_ 环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},gambar_relay={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Gambar Relay - Telegram image bot");
    print_config(&config);

    // 推理客户端
    let mut engine_config =
        HttpImageClientConfig::new(&config.inference.url, &config.inference.api_key);
    if let Some(secs) = config.inference.timeout_secs {
        engine_config = engine_config.with_timeout(secs);
    }
    let image_engine = Arc::new(HttpImageClient::new(engine_config)?);

    // 临时文件目录
    let artifact_storage = Arc::new(FileArtifactStorage::new(&config.storage.temp_dir).await?);

    // Telegram Bot，token 无效则终止启动
    let bot = Bot::new(&config.telegram.token);
    verify_bot(&bot)
        .await
        .context("Gagal menjalankan bot: invalid Telegram token or API unreachable")?;

    let event_log = Arc::new(TracingEventLog::new("relay"));
    let replier = Arc::new(TelegramReplier::new(bot.clone()));
    let generate_handler = GenerateImageHandler::new(
        image_engine,
        artifact_storage,
        replier.clone(),
        event_log.clone(),
    );
    let listener = Arc::new(ChatListener::new(replier, generate_handler, event_log));

    // 健康检查服务（可选）
    let (stop_tx, stop_rx) = tokio::sync::watch::channel(false);
    let health_task = if config.health.enabled {
        let server = HealthServer::new(ServerConfig::new(&config.health.host, config.health.port));
        let tcp = server.bind().await?;
        let mut stop_rx = stop_rx.clone();
        Some(tokio::spawn(server.serve_with_shutdown(tcp, async move {
            let _ = stop_rx.changed().await;
        })))
    } else {
        None
    };

    // 收到信号即停止接收新消息，不等待进行中的请求
    tokio::select! {
        _ = run_dispatcher(bot, listener) => {
            tracing::warn!("Dispatcher stopped");
        }
        signal = shutdown_signal() => {
            tracing::info!(signal, "Received shutdown signal");
        }
    }

    let _ = stop_tx.send(true);
    if let Some(handle) = health_task {
        match handle.await {
            Ok(Err(e)) => tracing::error!(error = %e, "Health server failed"),
            Err(e) => tracing::error!(error = %e, "Health server task panicked"),
            Ok(Ok(())) => {}
        }
    }

    tracing::info!("Shutdown complete");

    Ok(())
}

/// 等待 SIGINT 或 SIGTERM
async fn shutdown_signal() -> &'static str {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => "SIGINT",
        _ = terminate => "SIGTERM",
    }
}
