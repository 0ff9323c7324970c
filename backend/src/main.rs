mod config;
mod error;
mod protocol;
mod routes;
mod session;
mod state;

use clap::Parser;
use config::Config;
use state::AppState;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = Config::parse();
    let catalog = config.load_catalog()?;
    info!("Loaded {} catalog entries", catalog.len());

    let app = routes::router(Arc::new(AppState::new(catalog)));

    info!("listening on {}", config.bind);
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
