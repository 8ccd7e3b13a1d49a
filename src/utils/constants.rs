//! Shared configuration constants for pagemark
//!
//! Default values used by the server, the rendering provider and the
//! conversion pipeline. Kept in one place to avoid magic numbers.

/// Default HTTP listen port (matches the Cloud Run convention).
pub const DEFAULT_PORT: u16 = 8080;

/// Default bind address for the HTTP listener.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

/// Default timeout for page navigation, in seconds.
///
/// Bounds the acquisition phase of a single request. Exceeding it fails
/// that request only.
pub const DEFAULT_NAVIGATION_TIMEOUT_SECS: u64 = 30;

/// Upper bound for the optional settle delay requested by a client.
///
/// `waitForTimeoutSeconds` beyond this is clamped so one request cannot pin
/// a browser indefinitely.
pub const MAX_SETTLE_DELAY_SECS: u64 = 60;

/// Timeout for individual CDP requests issued by chromiumoxide.
pub const CDP_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Chrome user agent string presented by the headless browser
///
/// Reference: https://chromiumdash.appspot.com/schedule
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";

/// Greeting served on `/`.
pub const WELCOME_MESSAGE: &str =
    "Welcome! Please use /api/scrape?url=<your_url> to convert a webpage to Markdown.";
