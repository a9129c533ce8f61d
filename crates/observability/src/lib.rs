//! Observability infrastructure for QuoteFeed
//!
//! This crate provides:
//! - Structured logging via tracing
//! - Prometheus metrics and the quote-endpoint counter set
//!
//! # Quick Start
//!
//! ```ignore
//! use observability::{init_logging, LogFormat};
//!
//! // Initialize logging
//! init_logging("quotefeed", LogFormat::Pretty)?;
//!
//! // Initialize metrics (optional)
//! observability::metrics::init_metrics(9090)?;
//! ```

pub mod logging;
pub mod metrics;

pub use logging::{init_logging, LogFormat};
pub use metrics::{init_metrics, FeedMetrics};
