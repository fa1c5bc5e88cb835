//! QuizHub - 儿童题库服务
//!
//! 启动流程: 加载配置 → 初始化日志 → 构建题库 → 启动 HTTP 服务器

use std::sync::Arc;

use anyhow::Context;

use quizhub::application::QuestionStorePort;
use quizhub::config::{load_config, print_config, AppConfig, StoreSource};
use quizhub::infrastructure::http::{AppState, HttpServer, ServerConfig};
use quizhub::infrastructure::persistence::{BuiltinQuestionStore, JsonFileQuestionStore};

/// 按配置构建题库（只构建一次，此后只读）
async fn build_store(config: &AppConfig) -> Arc<dyn QuestionStorePort> {
    match config.store.source {
        StoreSource::Builtin => Arc::new(BuiltinQuestionStore::new()),
        StoreSource::Files => Arc::new(JsonFileQuestionStore::load(&config.store.data_dir).await),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：PORT > QUIZHUB_ 环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},quizhub={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("QuizHub - 儿童题库服务");
    print_config(&config);

    let store = build_store(&config).await;

    let mut server_config = ServerConfig::new(&config.server.host, config.server.port);
    if config.server.static_files.enabled {
        server_config = server_config.with_static_dir(&config.server.static_files.dir);
    }

    let server = HttpServer::new(server_config, AppState::new(store));

    let result = server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await;

    if let Err(e) = &result {
        if e.is_addr_in_use() {
            tracing::error!(
                "Port {} is already in use. Close the application using it or set PORT to another value.",
                config.server.port
            );
        }
    }
    result.context("HTTP server failed")?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
