//! Development HTTP Server Binary
//!
//! # Usage
//!
//! ```bash
//! # Start with default settings (port 3001, demo content seeded)
//! cargo run --bin dev-server
//!
//! # Custom port, no demo content
//! DEV_SERVER_PORT=3002 DEV_SERVER_SEED=false cargo run --bin dev-server
//! ```
//!
//! # Environment Variables
//!
//! - `DEV_SERVER_PORT`: Server port (default: 3001)
//! - `DEV_SERVER_HOST`: Listen address (default: 127.0.0.1)
//! - `DEV_SERVER_SEED`: Seed a demo site and page (default: true)
//! - `CORS_ALLOW_ORIGIN`: Allowed origin (default: local Vite ports)
//! - `RUST_LOG`: Logging level (e.g., "info", "debug", "trace")

use pagecraft_dev_server::DevServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("PageCraft HTTP Dev Server");
    tracing::info!("==================================");

    let config = DevServerConfig::from_env();
    tracing::info!("Port: {}", config.port);

    pagecraft_dev_server::start_server(config).await
}
