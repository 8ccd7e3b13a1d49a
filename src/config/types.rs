//! Process configuration for the HTTP service
//!
//! Loaded once at startup from the environment. Invalid values fall back to
//! their defaults with a warning so a typo never keeps the service down.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

use crate::utils::constants::{DEFAULT_BIND_ADDRESS, DEFAULT_NAVIGATION_TIMEOUT_SECS, DEFAULT_PORT};
use crate::utils::string_utils::{is_falsy, is_truthy};

pub const PORT_ENV: &str = "PORT";
pub const BIND_ADDRESS_ENV: &str = "BIND_ADDRESS";
pub const NAVIGATION_TIMEOUT_ENV: &str = "NAVIGATION_TIMEOUT_SECS";
pub const HEADLESS_ENV: &str = "HEADLESS";
pub const CHROMIUM_PATH_ENV: &str = "CHROMIUM_PATH";

/// Main configuration struct for the scrape service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub(crate) port: u16,
    pub(crate) bind_address: String,

    /// Upper bound on page navigation per request
    ///
    /// Default: 30 seconds
    pub(crate) navigation_timeout_secs: u64,

    /// Run Chromium without a window (default: true)
    pub(crate) headless: bool,

    /// Explicit browser executable; `None` searches the usual install paths
    pub(crate) chromium_path: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            navigation_timeout_secs: DEFAULT_NAVIGATION_TIMEOUT_SECS,
            headless: true,
            chromium_path: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from process environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = parse_or_default(PORT_ENV, lookup(PORT_ENV), defaults.port);
        let navigation_timeout_secs = parse_or_default(
            NAVIGATION_TIMEOUT_ENV,
            lookup(NAVIGATION_TIMEOUT_ENV),
            defaults.navigation_timeout_secs,
        );

        let bind_address = lookup(BIND_ADDRESS_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.bind_address);

        let headless = match lookup(HEADLESS_ENV) {
            Some(v) if is_falsy(&v) => false,
            Some(v) if is_truthy(&v) || v.trim().is_empty() => true,
            Some(v) => {
                warn!(value = %v, "Unrecognized {HEADLESS_ENV} value, keeping headless mode");
                true
            }
            None => defaults.headless,
        };

        let chromium_path = lookup(CHROMIUM_PATH_ENV).filter(|v| !v.trim().is_empty());

        Self {
            port,
            bind_address,
            navigation_timeout_secs,
            headless,
            chromium_path,
        }
    }
}

fn parse_or_default<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            warn!(key, value = %raw, default = %default, "Invalid value, using default");
            default
        }
    }
}
