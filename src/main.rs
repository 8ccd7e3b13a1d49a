// Category HTTP Server: pagemark
//
// Serves rendered web pages as Markdown over HTTP. Listens on $PORT
// (default 8080).

use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pagemark::{ChromiumProvider, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    let provider = Arc::new(ChromiumProvider::from_config(&config));

    pagemark::server::serve(config, provider).await
}
