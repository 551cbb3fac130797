// ==========================================
// 照护机构排班系统 - HTTP 服务主入口
// ==========================================
// 技术栈: axum + tokio
// ==========================================

use std::sync::Arc;

use anyhow::Context;
use shift_roster::app::{router, AppState};
use shift_roster::config::ServerConfig;
use shift_roster::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 先加载配置（日志格式取决于配置）
    let config = ServerConfig::from_env().context("配置加载失败")?;

    // 初始化日志系统
    logging::init(config.log_format);

    tracing::info!("==================================================");
    tracing::info!("{} - 班次模式排班服务", shift_roster::APP_NAME);
    tracing::info!("系统版本: {}", shift_roster::VERSION);
    tracing::info!("错误消息语言: {}", config.locale);
    tracing::info!("==================================================");

    let addr = config.socket_addr()?;
    let state = Arc::new(AppState::new(config));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("无法监听地址 {}", addr))?;
    tracing::info!("服务已启动，监听: {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP 服务异常退出")?;

    tracing::info!("服务已退出");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Ctrl-C 监听失败: {}", e);
    }
    tracing::info!("收到退出信号，正在关闭...");
}
