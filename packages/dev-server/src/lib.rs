//! Development-only HTTP server for the PageCraft editor
//!
//! Exposes page content load/save, rendering and editor command batches
//! over REST, backed by the in-memory page store. Intended for web-mode
//! testing of the editor; there is no real authentication, the caller is
//! named by the `x-user-id` header.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin dev-server
//! ```
//!
//! # Architecture
//!
//! Endpoint modules expose `routes(state)` and are merged into one router
//! by [`create_router`].

use axum::{
    http::{header, Method},
    Router,
};
use pagecraft_core::services::InMemoryPageStore;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
mod http_error;
pub mod page_endpoints;
pub mod seed;

pub use config::{ConfigError, DevServerConfig};
pub use http_error::HttpError;

/// Application state shared across all endpoints
#[derive(Clone, Default)]
pub struct AppState {
    pub store: InMemoryPageStore,
}

impl AppState {
    pub fn new(store: InMemoryPageStore) -> Self {
        Self { store }
    }
}

/// Create the main application router with all endpoint modules
///
/// # Errors
///
/// Returns `ConfigError` if the configured CORS origin is not a valid
/// header value.
pub fn create_router(state: AppState, config: &DevServerConfig) -> Result<Router, ConfigError> {
    Ok(Router::new()
        .merge(page_endpoints::routes(state))
        .layer(cors_layer(config)?)
        .layer(TraceLayer::new_for_http()))
}

/// CORS layer for the editor's Vite dev server
fn cors_layer(config: &DevServerConfig) -> Result<CorsLayer, ConfigError> {
    Ok(CorsLayer::new()
        .allow_origin(config.cors_origins()?)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([
            header::CONTENT_TYPE,
            header::HeaderName::from_static(page_endpoints::USER_ID_HEADER),
        ])
        .allow_credentials(false))
}

/// Start the HTTP dev server
///
/// Seeds demo content first when `config.seed_demo_content` is set.
///
/// # Errors
///
/// Returns error if the configuration is invalid, seeding fails, or the
/// server fails to bind.
pub async fn start_server(config: DevServerConfig) -> anyhow::Result<()> {
    let state = AppState::default();

    if config.seed_demo_content {
        let page = seed::seed_demo_content(&state.store).await?;
        tracing::info!(
            "Demo page: GET /api/pages/{}/content (x-user-id: {})",
            page.id,
            seed::DEMO_USER_ID
        );
    }

    let app = create_router(state, &config)?;

    let addr = config.bind_address();
    tracing::info!("HTTP dev server starting on http://{}", addr);
    tracing::info!("Development mode only - NOT for production use");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
