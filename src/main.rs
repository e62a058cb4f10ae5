// main.rs
// Axum server wiring: loads config, connects the document store, builds router, and serves.
//
// Endpoints:
// - GET /health                       -> liveness probe
// - GET /force-download?url&filename  -> relays a remote file as an attachment
// - GET /api/admin/{user_id}          -> { userId, isAdmin }
// - GET /api/filename?name=...        -> sanitized storage filename
// - GET /api/documents                -> classified documents (admin only, x-user-id header)
// - GET /api/documents/summary        -> bucket and status counts (admin only)

use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use documentos::{config::Config, routes, state};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let state = Arc::new(
        state::init_state(&config)
            .await
            .context("failed to initialize MongoDB state")?,
    );

    let app = routes::router(state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, bucket = ?config.storage_bucket, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
