//! Quote retrieval operations.
//!
//! Three read operations, each a single-pass fan-out into generator calls:
//! one random catalog quote, the full catalog, or a caller-supplied symbol
//! list. No operation holds state across requests and none can fail;
//! input validation is the transport layer's concern.

use crate::catalog::PriceCatalog;
use crate::generator::QuoteGenerator;
use crate::types::{InstrumentPrice, Quote, QuotesEnvelope};
use rand::Rng;
use std::sync::Arc;
use tracing::debug;

/// Split a caller-supplied comma-delimited symbol list into raw tokens.
///
/// Tokens are trimmed and empty tokens discarded; order and duplicates are
/// preserved. An input that is empty after filtering yields an empty list,
/// not an error.
pub fn parse_symbol_list(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Read-side service answering quote requests off a shared catalog.
#[derive(Clone)]
pub struct QuoteService {
    generator: QuoteGenerator,
}

impl QuoteService {
    /// Service with the production generator over the given catalog.
    pub fn new(catalog: Arc<PriceCatalog>) -> Self {
        Self {
            generator: QuoteGenerator::new(catalog),
        }
    }

    /// Service over an explicitly constructed generator.
    pub fn with_generator(generator: QuoteGenerator) -> Self {
        Self { generator }
    }

    /// One quote for a symbol picked uniformly from the catalog.
    ///
    /// Returns the reduced instrument/price projection; unlike the envelope
    /// operations this contract omits `change_pct` and `quoted_at`.
    pub fn random_quote(&self) -> InstrumentPrice {
        let symbols = self.generator.catalog().all_symbols();
        // The catalog is never empty by construction (see PriceCatalog).
        let pick = rand::rng().random_range(0..symbols.len());
        let quote = self.generator.generate(symbols[pick].as_str());

        InstrumentPrice {
            instrument: quote.symbol,
            price: quote.price,
        }
    }

    /// One quote per catalog symbol, in catalog order.
    pub fn all_quotes(&self) -> QuotesEnvelope {
        let quotes: Vec<Quote> = self
            .generator
            .catalog()
            .all_symbols()
            .iter()
            .map(|symbol| self.generator.generate(symbol.as_str()))
            .collect();

        self.envelope(quotes)
    }

    /// Quotes for a caller-supplied comma-delimited symbol list.
    ///
    /// Each surviving token gets its own independent quote, in input order
    /// and with duplicates preserved. Unknown symbols are not an error;
    /// they price off the default base price.
    pub fn quotes_for(&self, raw_list: &str) -> QuotesEnvelope {
        let tokens = parse_symbol_list(raw_list);
        debug!(requested = tokens.len(), "Generating quotes for symbol list");

        let quotes: Vec<Quote> = tokens
            .into_iter()
            .map(|token| self.generator.generate(token))
            .collect();

        self.envelope(quotes)
    }

    /// The catalog this service answers from.
    pub fn catalog(&self) -> &PriceCatalog {
        self.generator.catalog()
    }

    /// Wrap quotes with the serving timestamp, stamped once per request
    /// after all quotes are generated.
    fn envelope(&self, quotes: Vec<Quote>) -> QuotesEnvelope {
        QuotesEnvelope {
            generated_at: self.generator.now(),
            quotes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{ChangeSource, Clock};
    use chrono::{DateTime, TimeZone, Utc};

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now_utc(&self) -> DateTime<Utc> {
            self.0
        }
    }

    struct FixedChange(f64);

    impl ChangeSource for FixedChange {
        fn draw_change_pct(&self) -> f64 {
            self.0
        }
    }

    fn fixed_service(change_pct: f64) -> (QuoteService, DateTime<Utc>) {
        let when = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        let generator = QuoteGenerator::with_sources(
            Arc::new(PriceCatalog::builtin()),
            Arc::new(FixedClock(when)),
            Arc::new(FixedChange(change_pct)),
        );
        (QuoteService::with_generator(generator), when)
    }

    #[test]
    fn test_parse_symbol_list() {
        assert_eq!(
            parse_symbol_list("BTCUSD, AAPL ,, PETR4"),
            vec!["BTCUSD", "AAPL", "PETR4"]
        );
        assert_eq!(parse_symbol_list("AAPL"), vec!["AAPL"]);
        assert_eq!(parse_symbol_list("AAPL,AAPL"), vec!["AAPL", "AAPL"]);
        assert!(parse_symbol_list("").is_empty());
        assert!(parse_symbol_list(" , ,, ").is_empty());
    }

    #[test]
    fn test_all_quotes_covers_catalog_in_order() {
        let (service, when) = fixed_service(0.5);
        let envelope = service.all_quotes();

        assert_eq!(envelope.quotes.len(), service.catalog().len());
        assert_eq!(envelope.generated_at, when);

        let quoted: Vec<&str> = envelope.quotes.iter().map(|q| q.symbol.as_str()).collect();
        let expected: Vec<&str> = service
            .catalog()
            .all_symbols()
            .iter()
            .map(|s| s.as_str())
            .collect();
        assert_eq!(quoted, expected);
    }

    #[test]
    fn test_quotes_for_trims_and_drops_empty_tokens() {
        let (service, _) = fixed_service(0.0);
        let envelope = service.quotes_for("BTCUSD, AAPL ,, PETR4");

        let quoted: Vec<&str> = envelope.quotes.iter().map(|q| q.symbol.as_str()).collect();
        assert_eq!(quoted, vec!["BTCUSD", "AAPL", "PETR4"]);
    }

    #[test]
    fn test_quotes_for_empty_list_yields_empty_envelope() {
        let (service, when) = fixed_service(0.0);
        let envelope = service.quotes_for("");

        assert!(envelope.quotes.is_empty());
        assert_eq!(envelope.generated_at, when);
    }

    #[test]
    fn test_quotes_for_preserves_duplicates() {
        let (service, _) = fixed_service(0.0);
        let envelope = service.quotes_for("AAPL,AAPL");

        assert_eq!(envelope.quotes.len(), 2);
        assert_eq!(envelope.quotes[0].symbol, envelope.quotes[1].symbol);
    }

    #[test]
    fn test_quotes_for_unknown_symbols_still_price() {
        let (service, _) = fixed_service(0.0);
        let envelope = service.quotes_for("ZZZZ");

        assert_eq!(envelope.quotes.len(), 1);
        assert_eq!(envelope.quotes[0].price, 100.0);
    }

    #[test]
    fn test_random_quote_draws_from_catalog() {
        let service = QuoteService::new(Arc::new(PriceCatalog::builtin()));

        for _ in 0..100 {
            let picked = service.random_quote();
            assert!(service.catalog().contains(picked.instrument.as_str()));
            assert!(picked.price > 0.0);
        }
    }
}
