//! Getter methods for `ServerConfig`

use std::net::SocketAddr;

use anyhow::{Context, Result};

use super::types::ServerConfig;

impl ServerConfig {
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    #[must_use]
    pub fn bind_address(&self) -> &str {
        &self.bind_address
    }

    #[must_use]
    pub fn navigation_timeout_secs(&self) -> u64 {
        self.navigation_timeout_secs
    }

    #[must_use]
    pub fn headless(&self) -> bool {
        self.headless
    }

    #[must_use]
    pub fn chromium_path(&self) -> Option<&str> {
        self.chromium_path.as_deref()
    }

    /// Listen address built from `bind_address` and `port`.
    ///
    /// # Errors
    /// If `bind_address` is not an IP address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip = self
            .bind_address()
            .parse::<std::net::IpAddr>()
            .with_context(|| format!("Invalid bind address '{}'", self.bind_address()))?;
        Ok(SocketAddr::new(ip, self.port()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() -> Result<()> {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr()?.to_string(), "0.0.0.0:8080");

        let ipv6 = ServerConfig {
            bind_address: "::1".to_string(),
            port: 9000,
            ..ServerConfig::default()
        };
        assert_eq!(ipv6.socket_addr()?.to_string(), "[::1]:9000");
        Ok(())
    }

    #[test]
    fn test_getters_expose_effective_values() {
        let config = ServerConfig::from_lookup(|key| match key {
            "PORT" => Some("3000".to_string()),
            "BIND_ADDRESS" => Some("127.0.0.1".to_string()),
            "HEADLESS" => Some("0".to_string()),
            _ => None,
        });
        assert_eq!(config.port(), 3000);
        assert_eq!(config.bind_address(), "127.0.0.1");
        assert_eq!(config.navigation_timeout_secs(), 30);
        assert!(!config.headless());
        assert_eq!(config.chromium_path(), None);
    }

    #[test]
    fn test_invalid_bind_address() {
        let config = ServerConfig {
            bind_address: "localhost".to_string(),
            ..ServerConfig::default()
        };
        assert!(config.socket_addr().is_err());
    }
}
