//! Server configuration.

use serde::{Deserialize, Serialize};

/// Environment variable overriding the advertised base URL.
pub const BASE_URL_ENV: &str = "CACHELAB_BASE_URL";

/// Configuration for the demo server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the HTTP listener binds to.
    pub port: u16,
    /// Base URL the pages use when printing absolute endpoint addresses.
    pub base_url: String,
}

impl ServerConfig {
    /// Resolve the configuration from a port and an optional base-URL flag.
    ///
    /// Precedence for the base URL: explicit flag, then the
    /// `CACHELAB_BASE_URL` environment variable, then a localhost default
    /// derived from the port.
    pub fn resolve(port: u16, base_url_flag: Option<String>) -> Self {
        let base_url = base_url_flag
            .or_else(|| std::env::var(BASE_URL_ENV).ok())
            .unwrap_or_else(|| format!("http://localhost:{port}"));

        Self { port, base_url }
    }

    /// Socket address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_beats_default() {
        let cfg = ServerConfig::resolve(3000, Some("https://demo.example".into()));
        assert_eq!(cfg.base_url, "https://demo.example");
        assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_default_base_url_uses_port() {
        // Note: assumes CACHELAB_BASE_URL is unset in the test environment.
        if std::env::var(BASE_URL_ENV).is_ok() {
            return;
        }
        let cfg = ServerConfig::resolve(8080, None);
        assert_eq!(cfg.base_url, "http://localhost:8080");
    }
}
