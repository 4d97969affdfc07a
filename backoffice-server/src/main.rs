use backoffice_server::{Config, Server, ServerState, init_logger_with_file};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // 1. 加载 .env
    let _ = dotenvy::dotenv();

    // 2. 初始化日志
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_dir.as_deref());

    tracing::info!("Samovar back-office server starting...");

    // 3. 加载配置
    let config = Config::from_env();

    // 4. 初始化服务器状态 (数据库、迁移、初始管理员)
    let state = ServerState::initialize(&config).await;

    // 5. 启动 HTTP 服务器
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}
