use dotenvy::dotenv;
use tracing::{info, warn};

use mergington::config::ServerConfig;
use mergington::database::{seed::seed_activities, ActivityStore};
use mergington::logging;
use mergington::web::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // 1. Logging
    logging::init_logging("info");
    info!(version = env!("CARGO_PKG_VERSION"), "starting");

    // 2. Config
    let config = ServerConfig::from_env()?;

    // 3. App
    let store = ActivityStore::new(seed_activities());
    let app = build_router(AppState::new(store), &config.static_dir);

    // 4. Bind, with one fallback port
    let addr = config.addr()?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!(%addr, %fallback, error = %e, "bind failed, trying fallback");
            tokio::net::TcpListener::bind(fallback).await?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("Server running on http://{}", bound_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
