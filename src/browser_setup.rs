//! Locating, downloading and launching the Chromium used for rendering.

use anyhow::{Context, Result};
use chromiumoxide::Handler;
use chromiumoxide::browser::{Browser, BrowserConfigBuilder, HeadlessMode};
use chromiumoxide::fetcher::{BrowserFetcher, BrowserFetcherOptions};
use futures::StreamExt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, trace, warn};

use crate::utils::constants::{CDP_REQUEST_TIMEOUT_SECS, CHROME_USER_AGENT};

/// Executable names looked up on `PATH`.
const EXECUTABLE_NAMES: [&str; 4] = ["chromium", "chromium-browser", "google-chrome", "chrome"];

/// Well-known install locations. A leading `~/` is the home directory.
#[cfg(target_os = "macos")]
const INSTALL_LOCATIONS: &[&str] = &[
    "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
    "/Applications/Chromium.app/Contents/MacOS/Chromium",
    "~/Applications/Chromium.app/Contents/MacOS/Chromium",
];

#[cfg(target_os = "windows")]
const INSTALL_LOCATIONS: &[&str] = &[
    r"C:\Program Files\Google\Chrome\Application\chrome.exe",
    r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe",
];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const INSTALL_LOCATIONS: &[&str] = &[
    "/usr/bin/chromium",
    "/usr/bin/chromium-browser",
    "/usr/bin/google-chrome-stable",
    "/opt/google/chrome/chrome",
];

/// Flags for a short-lived, single-page headless session.
const LAUNCH_ARGS: [&str; 9] = [
    "--no-sandbox",
    "--disable-dev-shm-usage",
    "--disable-gpu",
    "--disable-extensions",
    "--disable-background-networking",
    "--no-first-run",
    "--no-default-browser-check",
    "--hide-scrollbars",
    "--mute-audio",
];

/// Find a Chrome/Chromium executable.
///
/// Order: the `configured` path (from `CHROMIUM_PATH`), well-known install
/// locations, then every directory on `PATH`.
pub async fn find_browser_executable(configured: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = configured {
        let path = PathBuf::from(path);
        if path.is_file() {
            info!(path = %path.display(), "Using configured browser executable");
            return Ok(path);
        }
        warn!(
            path = %path.display(),
            "Configured browser executable does not exist, searching default locations"
        );
    }

    let home = dirs::home_dir();
    let installed = INSTALL_LOCATIONS
        .iter()
        .filter_map(|location| expand_home(location, home.as_deref()))
        .find(|path| path.is_file());
    if let Some(path) = installed {
        info!(path = %path.display(), "Found browser");
        return Ok(path);
    }

    let search_path = std::env::var_os("PATH").unwrap_or_default();
    if let Some(path) = find_on_path(std::env::split_paths(&search_path), &EXECUTABLE_NAMES) {
        info!(path = %path.display(), "Found browser on PATH");
        return Ok(path);
    }

    warn!("No Chrome/Chromium executable found, falling back to a managed download");
    Err(anyhow::anyhow!("Chrome/Chromium executable not found"))
}

fn expand_home(location: &str, home: Option<&Path>) -> Option<PathBuf> {
    match location.strip_prefix("~/") {
        Some(rest) => home.map(|home| home.join(rest)),
        None => Some(PathBuf::from(location)),
    }
}

/// First `dir/name` that is a file, directories taking precedence over names.
fn find_on_path<I>(dirs: I, names: &[&str]) -> Option<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    dirs.into_iter().find_map(|dir| {
        names
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}

/// Download Chromium into the user cache directory and return its executable.
pub async fn download_managed_browser() -> Result<PathBuf> {
    let cache_dir = dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("pagemark")
        .join("chromium");
    info!(cache_dir = %cache_dir.display(), "Downloading managed Chromium");

    std::fs::create_dir_all(&cache_dir).context("Failed to create browser cache directory")?;

    let options = BrowserFetcherOptions::builder()
        .with_path(&cache_dir)
        .build()
        .context("Failed to build fetcher options")?;
    let revision = BrowserFetcher::new(options)
        .fetch()
        .await
        .context("Failed to download Chromium")?;

    info!(folder = %revision.folder_path.display(), "Downloaded Chromium");
    Ok(revision.executable_path)
}

/// Find or download Chromium and launch it with `profile_dir` as its
/// user data directory.
///
/// Returns the browser and the task driving its CDP connection. The caller
/// aborts the task after closing the browser and owns `profile_dir`.
pub async fn launch_browser(
    headless: bool,
    profile_dir: &Path,
    chromium_path: Option<&str>,
) -> Result<(Browser, JoinHandle<()>)> {
    let executable = match find_browser_executable(chromium_path).await {
        Ok(path) => path,
        Err(_) => download_managed_browser().await?,
    };

    std::fs::create_dir_all(profile_dir).context("Failed to create browser profile directory")?;

    let mut builder = BrowserConfigBuilder::default()
        .chrome_executable(executable)
        .user_data_dir(profile_dir)
        .request_timeout(Duration::from_secs(CDP_REQUEST_TIMEOUT_SECS))
        .window_size(1920, 1080)
        .arg(format!("--user-agent={CHROME_USER_AGENT}"))
        .args(LAUNCH_ARGS);
    builder = if headless {
        builder.headless_mode(HeadlessMode::default())
    } else {
        builder.with_head()
    };

    let config = builder
        .build()
        .map_err(|e| anyhow::anyhow!("Invalid browser config: {e}"))?;

    debug!(headless, profile_dir = %profile_dir.display(), "Launching browser");
    let (browser, handler) = Browser::launch(config)
        .await
        .context("Failed to launch browser")?;

    Ok((browser, tokio::spawn(drive_cdp_handler(handler))))
}

async fn drive_cdp_handler(mut handler: Handler) {
    while let Some(event) = handler.next().await {
        match event {
            Ok(()) => {}
            Err(e) if is_benign_cdp_error(&e.to_string()) => trace!(error = %e, "Ignored CDP message"),
            Err(e) => error!(error = %e, "CDP handler error"),
        }
    }
    debug!("CDP handler finished");
}

/// Chrome emits CDP events chromiumoxide cannot deserialize
/// (https://github.com/mattsse/chromiumoxide/issues/167).
fn is_benign_cdp_error(message: &str) -> bool {
    message.contains("data did not match any variant of untagged enum Message")
        || message.contains("Failed to deserialize WS response")
}
