//! Rendering provider: turns a URL into a rendered HTML snapshot.
//!
//! The conversion pipeline only ever sees a [`PageSnapshot`]. Production
//! uses [`ChromiumProvider`], which launches one browser per request; tests
//! substitute their own [`RenderingProvider`].

pub mod chromium;
pub mod page_timeout;

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

pub use chromium::ChromiumProvider;
pub use page_timeout::with_page_timeout;

use crate::utils::constants::{DEFAULT_NAVIGATION_TIMEOUT_SECS, MAX_SETTLE_DELAY_SECS};

/// Failures of the rendering collaborator
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to launch browser: {0}")]
    Launch(String),

    #[error("Navigation failed: {0}")]
    Navigation(String),

    #[error("{operation} timed out after {seconds} seconds")]
    Timeout { operation: String, seconds: u64 },

    #[error("Failed to read page content: {0}")]
    Content(String),
}

/// Rendered document plus the main navigation's HTTP status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSnapshot {
    pub html: String,
    /// `None` when the navigation produced no HTTP response (e.g. `about:` or
    /// `data:` URLs)
    pub status: Option<u16>,
}

impl PageSnapshot {
    /// True for 2xx statuses and for navigations without a status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_none_or(|status| (200..300).contains(&status))
    }
}

/// Per-request navigation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationOptions {
    /// Upper bound on navigation, in seconds
    pub timeout_secs: u64,
    /// Extra delay after navigation so client-side rendering can settle
    pub settle_delay: Option<Duration>,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_NAVIGATION_TIMEOUT_SECS,
            settle_delay: None,
        }
    }
}

impl NavigationOptions {
    /// Set the settle delay from a requested number of seconds.
    ///
    /// Zero means no delay; values above [`MAX_SETTLE_DELAY_SECS`] are clamped.
    #[must_use]
    pub fn with_settle_seconds(mut self, seconds: Option<u64>) -> Self {
        self.settle_delay = seconds
            .filter(|&s| s > 0)
            .map(|s| Duration::from_secs(s.min(MAX_SETTLE_DELAY_SECS)));
        self
    }
}

/// Source of rendered page snapshots.
///
/// Implementations own whatever resource they acquire for a fetch and must
/// release it on every exit path.
#[async_trait]
pub trait RenderingProvider: Send + Sync {
    async fn fetch(&self, url: &str, options: &NavigationOptions) -> Result<PageSnapshot, RenderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_success() {
        let snapshot = |status| PageSnapshot {
            html: String::new(),
            status,
        };
        assert!(snapshot(Some(200)).is_success());
        assert!(snapshot(Some(204)).is_success());
        assert!(snapshot(None).is_success());
        assert!(!snapshot(Some(301)).is_success());
        assert!(!snapshot(Some(404)).is_success());
        assert!(!snapshot(Some(503)).is_success());
    }

    #[test]
    fn test_settle_seconds() {
        let base = NavigationOptions::default();
        assert_eq!(base.with_settle_seconds(None).settle_delay, None);
        assert_eq!(base.with_settle_seconds(Some(0)).settle_delay, None);
        assert_eq!(
            base.with_settle_seconds(Some(3)).settle_delay,
            Some(Duration::from_secs(3))
        );
        assert_eq!(
            base.with_settle_seconds(Some(10_000)).settle_delay,
            Some(Duration::from_secs(MAX_SETTLE_DELAY_SECS))
        );
    }
}
