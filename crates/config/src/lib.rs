use serde::{Deserialize, Serialize};

pub mod defaults;
pub mod parser;
pub mod substitution;
pub mod validator;

pub use defaults::*;
pub use parser::*;
pub use substitution::*;
pub use validator::*;

/// Top-level configuration for the quote producer process.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProducerConfig {
    pub service: ServiceConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub server: HttpConfig,
}

/// Service identity, reported by the health endpoint and logs.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    pub name: String,
    pub description: String,
    pub version: String,
}

/// Reference price catalog configuration.
///
/// Example YAML:
/// ```yaml
/// catalog:
///   default_base_price: 100.0
///   instruments:
///     - symbol: BTCUSD
///       base_price: 52000.0
///     - symbol: AAPL
///       base_price: 190.0
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Base price used when a requested symbol is not in the catalog.
    #[serde(default = "default_base_price")]
    pub default_base_price: f64,
    /// Known instruments and their reference prices, in serving order.
    #[serde(default = "default_instruments")]
    pub instruments: Vec<CatalogEntry>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_base_price: default_base_price(),
            instruments: default_instruments(),
        }
    }
}

/// A single catalog entry: symbol plus reference price.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogEntry {
    pub symbol: String,
    #[serde(rename = "base_price")]
    pub base_price: f64,
}

/// HTTP server binding configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(rename = "http_port")]
    #[serde(default = "default_http_port")]
    pub http_port: u16,
    /// Optional port for the Prometheus metrics exporter. Disabled when
    /// absent.
    #[serde(rename = "metrics_port")]
    #[serde(default)]
    pub metrics_port: Option<u16>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            http_port: default_http_port(),
            metrics_port: None,
        }
    }
}
