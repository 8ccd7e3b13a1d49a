//! Scrape orchestration: render a URL, then convert the snapshot.
//!
//! Metadata is read from the untouched snapshot; the conversion pipeline
//! runs on its own copy. Neither runs when the upstream load failed.

pub mod errors;

use tracing::{debug, info, warn};

pub use errors::ScrapeError;

use crate::markdown_converter::{ConversionOptions, convert_html_to_markdown_sync};
use crate::page_extractor::{ExtractionResult, extract_metadata};
use crate::rendering::{NavigationOptions, RenderingProvider};

/// One validated scrape request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeRequest {
    pub url: String,
    pub options: ConversionOptions,
    /// Respond with JSON instead of the labeled text layout
    pub use_json: bool,
    /// Settle delay after navigation, in whole seconds
    pub wait_seconds: Option<u64>,
}

impl ScrapeRequest {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            options: ConversionOptions::default(),
            use_json: false,
            wait_seconds: None,
        }
    }
}

/// Render `request.url` through `provider` and convert it to markdown.
///
/// # Errors
/// * [`ScrapeError::UpstreamLoad`] - navigation finished with a non-2xx status
/// * [`ScrapeError::Rendering`] - the provider failed or timed out
/// * [`ScrapeError::Conversion`] - the pipeline failed
pub async fn scrape_url(
    provider: &dyn RenderingProvider,
    request: &ScrapeRequest,
    navigation: NavigationOptions,
) -> Result<ExtractionResult, ScrapeError> {
    let navigation = navigation.with_settle_seconds(request.wait_seconds);
    debug!(url = %request.url, ?navigation, "Fetching page");

    let snapshot = provider.fetch(&request.url, &navigation).await?;

    if !snapshot.is_success() {
        let status = snapshot.status.unwrap_or_default();
        warn!(url = %request.url, status, "Upstream load failed");
        return Err(ScrapeError::UpstreamLoad { status });
    }

    let html = snapshot.html;
    let options = request.options;
    let (metadata, markdown) = tokio::task::spawn_blocking(move || {
        let metadata = extract_metadata(&html);
        convert_html_to_markdown_sync(&html, &options).map(|markdown| (metadata, markdown))
    })
    .await
    .map_err(|e| ScrapeError::Conversion(anyhow::anyhow!("Conversion task panicked: {e}")))?
    .map_err(ScrapeError::Conversion)?;

    info!(
        url = %request.url,
        title = %metadata.title,
        markdown_bytes = markdown.len(),
        "Page converted"
    );

    Ok(ExtractionResult::new(metadata, request.url.clone(), markdown))
}
