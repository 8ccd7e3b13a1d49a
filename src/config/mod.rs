//! Configuration module for the scrape service
//!
//! `ServerConfig` is read from the environment once at startup:
//!
//! | Variable | Default |
//! | --- | --- |
//! | `PORT` | `8080` |
//! | `BIND_ADDRESS` | `0.0.0.0` |
//! | `NAVIGATION_TIMEOUT_SECS` | `30` |
//! | `HEADLESS` | on (`0`/`false` shows the browser) |
//! | `CHROMIUM_PATH` | search default install locations |

pub mod getters;
pub mod types;

pub use types::ServerConfig;
