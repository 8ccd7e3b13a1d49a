//! HTML to Markdown conversion pipeline
//!
//! Stages, run strictly in order over a single rendered page:
//! 1. Locate the main content element
//! 2. Filter boilerplate noise
//! 3. Format definition lists and tables
//! 4. Render markdown with htmd and the custom link/image/block handlers
//! 5. Postprocess the rendered text
//!
//! # Usage
//!
//! ## Synchronous (for blocking contexts)
//! ```rust
//! # use pagemark::markdown_converter::{convert_html_to_markdown_sync, ConversionOptions};
//! let html = "<html><body><main><h1>Title</h1><p>Content</p></main></body></html>";
//! let markdown = convert_html_to_markdown_sync(html, &ConversionOptions::default())?;
//! assert_eq!(markdown, "# Title\n\nContent");
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Asynchronous
//! ```rust
//! # use pagemark::markdown_converter::{convert_html_to_markdown, ConversionOptions};
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let html = "<html><body><h1>Title</h1></body></html>";
//! let markdown = convert_html_to_markdown(html, &ConversionOptions::text_only()).await?;
//! # Ok::<(), anyhow::Error>(())
//! # }).unwrap();
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub mod custom_handlers;
pub mod html_preprocessing;
pub mod markdown_postprocessing;

pub use custom_handlers::create_converter;
pub use html_preprocessing::{extract_main_content, filter_noise, format_structured_data};
pub use markdown_postprocessing::postprocess_markdown;

/// Per-request options for HTML to Markdown conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionOptions {
    /// Render definition lists and tables as aligned text blocks (default: true)
    ///
    /// When disabled, each list becomes one `term: value; ...` paragraph and
    /// each table row becomes one `header: cell; ...` paragraph.
    pub format_tables: bool,

    /// Drop definition lists and tables entirely (default: false)
    pub strip_tables: bool,

    /// Drop all images (default: false)
    pub strip_images: bool,

    /// Render anchors as plain text (default: false)
    pub strip_links: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            format_tables: true,
            strip_tables: false,
            strip_images: false,
            strip_links: false,
        }
    }
}

impl ConversionOptions {
    /// Text-only mode: strips images and links
    #[must_use]
    pub fn text_only() -> Self {
        Self {
            strip_images: true,
            strip_links: true,
            ..Self::default()
        }
    }
}

/// Convert HTML to Markdown synchronously (blocking)
///
/// # Arguments
///
/// * `html` - Rendered page HTML
/// * `options` - Per-request rendering rules
///
/// # Returns
///
/// * `Ok(String)` - Normalized markdown
/// * `Err(anyhow::Error)` - If htmd fails
///
/// # Examples
///
/// ```rust
/// # use pagemark::markdown_converter::{convert_html_to_markdown_sync, ConversionOptions};
/// let html = r#"
///     <html>
///         <body>
///             <nav><a href="/">Home</a></nav>
///             <article>
///                 <h1>My Article</h1>
///                 <p>This is <strong>important</strong> content.</p>
///             </article>
///         </body>
///     </html>
/// "#;
///
/// let markdown = convert_html_to_markdown_sync(html, &ConversionOptions::default())?;
/// assert!(markdown.starts_with("# My Article"));
/// assert!(markdown.contains("**important**"));
/// assert!(!markdown.contains("Home"));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn convert_html_to_markdown_sync(html: &str, options: &ConversionOptions) -> Result<String> {
    let main_html = extract_main_content(html).context("Main content extraction failed")?;
    let clean_html = filter_noise(&main_html).context("Noise filtering failed")?;
    let formatted_html =
        format_structured_data(&clean_html, options).context("Structured data formatting failed")?;

    let markdown = create_converter(options)
        .convert(&formatted_html)
        .context("htmd conversion failed")?;

    Ok(postprocess_markdown(&markdown))
}

/// Convert HTML to Markdown asynchronously
///
/// Parsing and rendering are CPU-bound, so the synchronous pipeline runs on
/// the blocking pool instead of an async worker thread.
pub async fn convert_html_to_markdown(html: &str, options: &ConversionOptions) -> Result<String> {
    let html = Arc::<str>::from(html);
    let options = *options;

    tokio::task::spawn_blocking(move || convert_html_to_markdown_sync(&html, &options))
        .await
        .map_err(|e| anyhow::anyhow!("HTML-to-Markdown conversion task panicked: {}", e))?
}
