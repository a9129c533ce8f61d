//! Server configuration
//!
//! Binding configuration for the producer's HTTP listener, plus the
//! default port assignments.

use crate::error::{Result, ServerError};
use std::net::SocketAddr;

/// Default port assignments for the producer process.
pub mod ports {
    /// Quote producer HTTP port
    pub const PRODUCER_HTTP: u16 = 8087;
}

/// HTTP server binding configuration.
///
/// # Example
///
/// ```
/// use server::config::ServerConfig;
///
/// let config = ServerConfig::new("127.0.0.1", 8087);
/// assert!(config.http_addr().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to (e.g., "0.0.0.0" or "127.0.0.1")
    pub host: String,
    /// HTTP port
    pub http_port: u16,
}

impl ServerConfig {
    /// Create a new server config
    pub fn new(host: impl Into<String>, http_port: u16) -> Self {
        Self {
            host: host.into(),
            http_port,
        }
    }

    /// Get the HTTP socket address
    pub fn http_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.http_port)
            .parse()
            .map_err(|_| ServerError::InvalidAddress(format!("{}:{}", self.host, self.http_port)))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            http_port: ports::PRODUCER_HTTP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_new() {
        let config = ServerConfig::new("127.0.0.1", 8087);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.http_port, 8087);
    }

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.http_port, ports::PRODUCER_HTTP);
    }

    #[test]
    fn test_http_addr_parses() {
        let config = ServerConfig::new("127.0.0.1", 8087);
        let addr = config.http_addr().unwrap();
        assert_eq!(addr.port(), 8087);
    }

    #[test]
    fn test_http_addr_rejects_bad_host() {
        let config = ServerConfig::new("not a host", 8087);
        assert!(config.http_addr().is_err());
    }
}
