use permitnow::{router, AppConfig, AppState};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志 - 使用本地时间格式
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .init();

    // 加载配置
    let config = AppConfig::load()?;
    info!("Starting server with config: {:?}", config);

    // 启动时加载一次数据文件
    let state = Arc::new(AppState::load(&config.data).await);

    let app = router(state);

    // 启动服务器
    let addr = config.bind_addr();
    info!("Server listening on {}", addr);
    info!("Endpoints:");
    info!("  GET  /                 - estimator + info sections");
    info!("  POST /api/estimate     - compute estimate");
    info!("  GET  /api/print        - printable summary");
    info!("  GET  /api/summary.csv  - CSV export");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
