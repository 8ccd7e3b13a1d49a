//! Render web pages in a headless browser and convert them to clean Markdown.
//!
//! The conversion pipeline in [`markdown_converter`] is usable on its own;
//! [`server`] wraps it, together with a [`rendering::RenderingProvider`],
//! into the `/api/scrape` HTTP service.

pub mod browser_setup;
pub mod config;
pub mod markdown_converter;
pub mod page_extractor;
pub mod rendering;
pub mod scrape;
pub mod server;
pub mod utils;

pub use browser_setup::{download_managed_browser, find_browser_executable, launch_browser};
pub use config::ServerConfig;
pub use markdown_converter::{
    ConversionOptions, convert_html_to_markdown, convert_html_to_markdown_sync,
};
pub use page_extractor::{ExtractionResult, PageMetadata, extract_metadata};
pub use rendering::{
    ChromiumProvider, NavigationOptions, PageSnapshot, RenderError, RenderingProvider,
};
pub use scrape::{ScrapeError, ScrapeRequest, scrape_url};
pub use server::{AppState, router};
