//! API request/response models.

use crate::types::{InstrumentPrice, Quote, QuotesEnvelope};
use serde::{Deserialize, Serialize};

/// Query parameters for the explicit symbol list endpoint.
#[derive(Debug, Deserialize)]
pub struct QuotesParams {
    /// Comma-separated symbol list, e.g. `BTCUSD,AAPL,PETR4`. Required;
    /// the handler rejects requests without it.
    pub symbols: Option<String>,
}

/// Reduced response for the random-quote endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct InstrumentPriceResponse {
    pub instrument: String,
    pub price: f64,
}

impl From<InstrumentPrice> for InstrumentPriceResponse {
    fn from(picked: InstrumentPrice) -> Self {
        Self {
            instrument: picked.instrument.to_string(),
            price: picked.price,
        }
    }
}

/// Single quote in an envelope response.
#[derive(Debug, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub symbol: String,
    pub price: f64,
    pub change_pct: f64,
    pub quoted_at: String,
}

impl From<&Quote> for QuoteResponse {
    fn from(quote: &Quote) -> Self {
        Self {
            symbol: quote.symbol.to_string(),
            price: quote.price,
            change_pct: quote.change_pct,
            quoted_at: quote.quoted_at.to_rfc3339(),
        }
    }
}

/// Envelope response for the batch quote endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct QuotesEnvelopeResponse {
    pub generated_at: String,
    pub quotes: Vec<QuoteResponse>,
}

impl From<&QuotesEnvelope> for QuotesEnvelopeResponse {
    fn from(envelope: &QuotesEnvelope) -> Self {
        Self {
            generated_at: envelope.generated_at.to_rfc3339(),
            quotes: envelope.quotes.iter().map(Into::into).collect(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}
