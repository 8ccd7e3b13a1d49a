//! Request-level error taxonomy and its HTTP rendering.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::rendering::RenderError;

/// Everything that can stop a scrape request
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Missing 'url' query parameter")]
    MissingUrl,

    #[error("Invalid 'url' query parameter: {0}")]
    InvalidUrl(String),

    #[error("Invalid query string: {0}")]
    InvalidQuery(String),

    #[error("Failed to load URL: {status}")]
    UpstreamLoad { status: u16 },

    #[error(transparent)]
    Rendering(#[from] RenderError),

    #[error("Conversion failed: {0:#}")]
    Conversion(anyhow::Error),
}

impl ScrapeError {
    /// HTTP status this error is reported with.
    ///
    /// Upstream failures mirror the upstream status; statuses that are not
    /// valid HTTP codes become `502 Bad Gateway`.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingUrl | Self::InvalidUrl(_) | Self::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            Self::UpstreamLoad { status } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::Rendering(_) | Self::Conversion(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ScrapeError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            Self::MissingUrl => json!({ "error": "Missing 'url' query parameter" }),
            Self::InvalidUrl(_) => json!({ "error": "Invalid 'url' query parameter" }),
            Self::InvalidQuery(_) => json!({ "error": "Invalid query string" }),
            Self::UpstreamLoad { status } => json!({ "error": format!("Failed to load URL: {status}") }),
            Self::Rendering(_) | Self::Conversion(_) => json!({
                "error": "Failed to convert URL to Markdown",
                "details": self.to_string(),
            }),
        };
        (status, Json(body)).into_response()
    }
}
