//! # Quotes Crate
//!
//! Core of the QuoteFeed producer: the reference price catalog, the
//! synthetic quote generator, the retrieval service, and the HTTP API
//! surface built on top of them.
//!
//! ## Key Components
//!
//! - **Domain Types**: `Symbol`, `Quote`, `QuotesEnvelope`, `InstrumentPrice`
//! - **Catalog**: immutable symbol → base price mapping, shared read-only
//! - **Generator**: total symbol → quote function with injectable entropy
//!   (`Clock`, `ChangeSource`)
//! - **Service**: the three retrieval operations (random, all, explicit list)
//! - **API**: axum handlers/routes adapting the service to HTTP
//!
//! ## Architecture
//!
//! ```text
//! request ──► handlers ──► QuoteService ──► QuoteGenerator ──► PriceCatalog
//!                │               │                │
//!             models       envelope shaping   Clock + ChangeSource
//! ```
//!
//! Nothing here holds mutable state across requests: the catalog is frozen
//! at startup and every quote is an independent draw.

pub mod api;
pub mod catalog;
pub mod generator;
pub mod service;
pub mod types;

// Re-export main types for convenience
pub use api::{quote_routes, QuoteApiState};
pub use catalog::PriceCatalog;
pub use generator::{
    ChangeSource, Clock, QuoteGenerator, SystemClock, UniformChange, CHANGE_PCT_MAX,
    CHANGE_PCT_MIN,
};
pub use service::{parse_symbol_list, QuoteService};
pub use types::{InstrumentPrice, Quote, QuotesEnvelope, Symbol};
