//! Server infrastructure for QuoteFeed
//!
//! HTTP server lifecycle with graceful shutdown. The [`Server`] trait gives
//! a consistent run/monitor interface; [`ServerExt`] adds `spawn()` and
//! `run_with_ctrl_c()`. Shutdown coordination uses `CancellationToken`
//! from `tokio_util`, so cancelling a parent token cancels all children.
//!
//! # Quick Start
//!
//! ```ignore
//! use server::{HttpServer, ServerConfig, ServerExt};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::default();
//!     let server = HttpServer::simple(config);
//!
//!     server.run_with_ctrl_c().await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`config`] - Server configuration and port constants
//! - [`traits`] - `Server` and `ServerExt` traits
//! - [`http`] - HTTP server using Axum
//! - [`health`] - Health check endpoint
//! - [`shutdown`] - Graceful shutdown utilities
//! - [`port_validator`] - Early port availability checks

pub mod config;
pub mod error;
pub mod health;
pub mod http;
pub mod port_validator;
pub mod shutdown;
pub mod traits;

// Re-exports for convenience
pub use config::{ports, ServerConfig};
pub use error::{Result, ServerError};
pub use health::{health_routes, HealthState};
pub use http::HttpServer;
pub use port_validator::validate_ports_available;
pub use shutdown::{shutdown_signal, ShutdownController};
pub use traits::{Server, ServerExt};
