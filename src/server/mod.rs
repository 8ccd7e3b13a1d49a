//! HTTP surface
//!
//! - `GET /` - plain-text greeting
//! - `GET /api/scrape?url=...` - render a page and return it as markdown
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use pagemark::{ChromiumProvider, ServerConfig};
//! # async fn run() -> anyhow::Result<()> {
//! let config = ServerConfig::from_env();
//! let provider = Arc::new(ChromiumProvider::from_config(&config));
//! pagemark::server::serve(config, provider).await
//! # }
//! ```

pub mod handlers;
pub mod query;
pub mod response;

use anyhow::{Context, Result};
use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use tracing::info;

use crate::config::ServerConfig;
use crate::rendering::RenderingProvider;

pub use query::ScrapeQuery;
pub use response::format_text_response;

/// Shared, read-only state handed to every request
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn RenderingProvider>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(provider: Arc<dyn RenderingProvider>, config: ServerConfig) -> Self {
        Self {
            provider,
            config: Arc::new(config),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::welcome))
        .route("/api/scrape", get(handlers::scrape))
        .with_state(state)
}

/// Bind the configured address and serve until the process exits.
///
/// # Errors
/// If the address is invalid, cannot be bound, or the server fails.
pub async fn serve(config: ServerConfig, provider: Arc<dyn RenderingProvider>) -> Result<()> {
    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    info!(
        %addr,
        navigation_timeout_secs = config.navigation_timeout_secs(),
        headless = config.headless(),
        "Server listening"
    );

    let app = router(AppState::new(provider, config));
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
