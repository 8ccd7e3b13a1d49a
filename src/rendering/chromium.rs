//! Chromium-backed rendering provider.
//!
//! Every fetch launches its own browser with a fresh profile directory and
//! tears it down afterwards, whether the fetch succeeded, failed, or was
//! cancelled mid-flight.

use async_trait::async_trait;
use chromiumoxide::{Browser, Page};
use std::path::PathBuf;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::{NavigationOptions, PageSnapshot, RenderError, RenderingProvider, with_page_timeout};
use crate::browser_setup::launch_browser;
use crate::config::ServerConfig;
use crate::utils::constants::CDP_REQUEST_TIMEOUT_SECS;

/// Launches headless (or headed) Chromium per request.
#[derive(Debug, Clone)]
pub struct ChromiumProvider {
    headless: bool,
    chromium_path: Option<String>,
}

impl ChromiumProvider {
    #[must_use]
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            headless: config.headless(),
            chromium_path: config.chromium_path().map(String::from),
        }
    }
}

#[async_trait]
impl RenderingProvider for ChromiumProvider {
    async fn fetch(&self, url: &str, options: &NavigationOptions) -> Result<PageSnapshot, RenderError> {
        let session = BrowserSession::launch(self.headless, self.chromium_path.as_deref()).await?;
        let result = session.capture(url, options).await;
        session.shutdown().await;
        result
    }
}

/// One browser process owned by one request.
///
/// `shutdown()` is the normal exit. If the owning future is dropped first,
/// `Drop` aborts the CDP handler and removes the profile directory;
/// chromiumoxide kills the child process when the `Browser` is dropped.
struct BrowserSession {
    browser: Browser,
    handler: JoinHandle<()>,
    user_data_dir: Option<PathBuf>,
}

impl BrowserSession {
    async fn launch(headless: bool, chromium_path: Option<&str>) -> Result<Self, RenderError> {
        let profile_dir = std::env::temp_dir().join(format!("pagemark_chrome_{}", Uuid::new_v4()));

        let (browser, handler) = match launch_browser(headless, &profile_dir, chromium_path).await {
            Ok(launched) => launched,
            Err(e) => {
                let _ = std::fs::remove_dir_all(&profile_dir);
                return Err(RenderError::Launch(format!("{e:#}")));
            }
        };

        debug!(user_data_dir = %profile_dir.display(), "Browser session started");
        Ok(Self {
            browser,
            handler,
            user_data_dir: Some(profile_dir),
        })
    }

    async fn capture(&self, url: &str, options: &NavigationOptions) -> Result<PageSnapshot, RenderError> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| RenderError::Navigation(format!("Failed to open page: {e}")))?;

        let status = with_page_timeout(
            navigate(&page, url),
            options.timeout_secs,
            "Page navigation",
        )
        .await?;

        if let Some(delay) = options.settle_delay {
            debug!(url, delay_ms = delay.as_millis() as u64, "Waiting for page to settle");
            tokio::time::sleep(delay).await;
        }

        let html = with_page_timeout(
            async {
                page.content()
                    .await
                    .map_err(|e| RenderError::Content(e.to_string()))
            },
            CDP_REQUEST_TIMEOUT_SECS,
            "Content capture",
        )
        .await?;

        info!(url, status = ?status, bytes = html.len(), "Page rendered");
        Ok(PageSnapshot { html, status })
    }

    async fn shutdown(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!("Failed to close browser cleanly: {}", e);
        }
        if let Err(e) = self.browser.wait().await {
            warn!("Failed to wait for browser exit: {}", e);
        }
        self.handler.abort();
        self.cleanup_temp_dir();
    }

    /// Remove the profile directory. Only safe once the browser has exited.
    fn cleanup_temp_dir(&mut self) {
        if let Some(path) = self.user_data_dir.take() {
            debug!(path = %path.display(), "Cleaning up browser profile directory");
            if let Err(e) = std::fs::remove_dir_all(&path) {
                warn!(
                    "Failed to clean up temp directory {}: {}. Manual cleanup may be required.",
                    path.display(),
                    e
                );
            }
        }
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        self.handler.abort();
        if self.user_data_dir.is_some() {
            warn!("BrowserSession dropped before shutdown - removing profile directory in Drop");
            self.cleanup_temp_dir();
        }
    }
}

/// Navigate and return the main document's HTTP status, if any.
async fn navigate(page: &Page, url: &str) -> Result<Option<u16>, RenderError> {
    page.goto(url)
        .await
        .map_err(|e| RenderError::Navigation(e.to_string()))?;

    let request = page
        .wait_for_navigation_response()
        .await
        .map_err(|e| RenderError::Navigation(e.to_string()))?;

    let status = request
        .as_ref()
        .and_then(|request| request.response.as_ref())
        .map(|response| response.status);

    Ok(status.and_then(|status| match u16::try_from(status) {
        Ok(status) => Some(status),
        Err(_) => {
            warn!(url, status, "Navigation reported an out-of-range status, ignoring it");
            None
        }
    }))
}
