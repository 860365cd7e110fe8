use anyhow::Context;
use log::info;
use std::sync::Arc;
use tokio::net::TcpListener;

mod api;
mod models;
mod services;
mod utils;

#[cfg(test)]
mod test_support;

use models::{AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // a missing .env is fine, the environment may already be set
    dotenv::dotenv().ok();

    let config = Config::from_env().context("invalid configuration")?;
    utils::init_logging(&config)?;

    let bind_addr = config.bind_addr;
    let state = Arc::new(AppState::new(config).context("failed to build HTTP client")?);
    let app = api::router(state);

    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    info!("presence-score listening on http://{}", bind_addr);
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
