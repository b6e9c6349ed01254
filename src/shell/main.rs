use tracing::info;

use items::shell::config::ServerConfig;
use items::shell::http::router;
use items::shell::logging::init_logging;
use items::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = ServerConfig::default();
    let app = router(AppState::in_memory());

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "items API listening");
    axum::serve(listener, app).await?;
    Ok(())
}
