//! Port validation utilities
//!
//! Checking a port before binding is inherently racy (another process can
//! take it between check and bind); these checks exist for early feedback,
//! the actual bind is the source of truth.

use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

use crate::config::ServerConfig;
use crate::error::{Result, ServerError};

/// Validate that the configured HTTP port is sane and available
pub async fn validate_ports_available(config: &ServerConfig) -> Result<()> {
    info!("Validating server ports...");
    validate_port_range(config.http_port)?;
    validate_single_port(&config.host, config.http_port, "HTTP").await?;
    info!("All server ports validated successfully");
    Ok(())
}

/// Validate a single port is available
async fn validate_single_port(host: &str, port: u16, protocol: &str) -> Result<()> {
    let addr = format!("{}:{}", host, port);
    debug!("Checking {} port {}", protocol, port);

    match TcpListener::bind(&addr).await {
        Ok(listener) => {
            let local_addr = listener
                .local_addr()
                .map_err(|e| ServerError::bind(addr.clone(), e))?;

            // Drop the listener to release the port
            drop(listener);

            info!("{} port {} is available ({})", protocol, port, local_addr);
            Ok(())
        }
        Err(e) => {
            error!("{} port {} is NOT available: {}", protocol, port, e);
            Err(ServerError::port_in_use(port, e.to_string()))
        }
    }
}

/// Check if a port is in use
///
/// Subject to the same TOCTOU caveat as the validators above.
pub async fn is_port_in_use(host: &str, port: u16) -> bool {
    let addr = format!("{}:{}", host, port);
    TcpListener::bind(&addr).await.is_err()
}

/// Validate port range
///
/// Port 0 is rejected; ports below 1024 generate a warning.
pub fn validate_port_range(port: u16) -> Result<()> {
    if port == 0 {
        Err(ServerError::ConfigError(
            "Port cannot be 0 (ephemeral port assignment not supported for explicit binding)"
                .to_string(),
        ))
    } else if port < 1024 {
        warn!(
            "Port {} is a privileged port (requires root/admin privileges)",
            port
        );
        Ok(())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_port_range() {
        assert!(validate_port_range(0).is_err());
        assert!(validate_port_range(80).is_ok()); // Warning but OK
        assert!(validate_port_range(8087).is_ok());
        assert!(validate_port_range(65535).is_ok());
    }

    #[tokio::test]
    async fn test_is_port_in_use() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        assert!(is_port_in_use("127.0.0.1", port).await);

        drop(listener);

        // Small race window here, but the port was just released
        assert!(!is_port_in_use("127.0.0.1", port).await);
    }
}
