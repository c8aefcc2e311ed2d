//! Recog - 页面外壳服务
//!
//! 启动流程: 配置 -> 日志 -> 后端客户端 -> 路由 -> HTTP 服务

use std::sync::Arc;

use recog::application::UserApiPort;
use recog::config::{load_config, print_config, LogConfig};
use recog::infrastructure::adapters::{HttpUserApiClient, HttpUserApiClientConfig};
use recog::infrastructure::http::{AppState, HttpServer, ServerConfig};
use recog::infrastructure::memory::MemoryHistory;
use recog::infrastructure::views::create_router;

fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},recog={},tower_http=debug", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Recog - 页面外壳服务");
    print_config(&config);

    let api_config = HttpUserApiClientConfig::new(config.api.base_url())
        .with_timeout(config.api.timeout_secs);
    let user_api = Arc::new(HttpUserApiClient::new(api_config)?);

    if !user_api.health_check().await {
        tracing::warn!(url = %config.api.base_url(), "Backend API is not reachable at startup");
    }

    let navigator = Arc::new(create_router(Arc::new(MemoryHistory::new()))?);

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(navigator, user_api);
    let server = HttpServer::new(server_config, state);

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

