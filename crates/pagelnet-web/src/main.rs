//! Pagelnet Web Server
//!
//! Run with: cargo run -p pagelnet-web -- [config.toml]

use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use pagelnet_config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Config path: first CLI argument, then env var, then the conventional name
    let config_path: PathBuf = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("PAGELNET_CONFIG").ok())
        .unwrap_or_else(|| "pagelnet.toml".to_string())
        .into();

    info!(path = %config_path.display(), "starting Pagelnet");
    let config = AppConfig::load(&config_path)?;

    // Load the network and tables once; they stay read-only from here on
    let state = pagelnet_web::state::AppState::load(&config)?;

    let app = pagelnet_web::router::build_router(state);

    let addr = config.bind_addr()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
