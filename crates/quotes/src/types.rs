//! Core domain types for synthetic quotes.
//!
//! - `Symbol`: uppercase-normalized instrument identifier
//! - `Quote`: one generated quote with its simulated move and timestamp
//! - `QuotesEnvelope`: a batch of quotes stamped with a single serving time
//! - `InstrumentPrice`: the reduced projection served by the random-quote
//!   endpoint

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a tradable instrument.
///
/// Input is case-insensitive; construction trims surrounding whitespace and
/// normalizes to uppercase, so "btcusd" and "BTCUSD" name the same
/// instrument everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a symbol from raw caller input.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_uppercase())
    }

    /// Get the normalized string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// One generated quote.
///
/// Holds the invariant `price == round(base * (1 + change_pct / 100), 4)`
/// for the catalog base price of `symbol` at generation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: Symbol,
    pub price: f64,
    pub change_pct: f64,
    pub quoted_at: DateTime<Utc>,
}

/// Batch of quotes stamped with a single serving time.
///
/// `generated_at` is captured once per request after all quotes are
/// generated; each quote keeps its own `quoted_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotesEnvelope {
    pub generated_at: DateTime<Utc>,
    pub quotes: Vec<Quote>,
}

/// Reduced projection served by the random-quote endpoint.
///
/// Deliberately omits `change_pct` and `quoted_at`; this endpoint has a
/// different contract than the envelope endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstrumentPrice {
    pub instrument: Symbol,
    pub price: f64,
}
