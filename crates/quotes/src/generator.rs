//! Synthetic quote generation.
//!
//! The generator turns a symbol into a priced, timestamped quote: resolve
//! the base price through the catalog, draw a simulated percentage move,
//! derive the price, stamp the UTC instant. It is stateless and memoryless:
//! every call is an independent draw, and consecutive quotes for the same
//! symbol are expected to differ.
//!
//! The two entropy sources (random draw and clock) are injected as traits
//! so tests can pin them without touching the generation logic.

use crate::catalog::PriceCatalog;
use crate::types::{Quote, Symbol};
use chrono::{DateTime, Utc};
use rand::Rng;
use std::sync::Arc;

/// Lower bound of the simulated change, in percent.
pub const CHANGE_PCT_MIN: f64 = -1.5;
/// Upper bound of the simulated change, in percent.
pub const CHANGE_PCT_MAX: f64 = 1.5;

/// Clock capability used to stamp quotes.
pub trait Clock: Send + Sync {
    /// Current UTC instant.
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Production clock reading the system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Source of simulated percentage moves.
pub trait ChangeSource: Send + Sync {
    /// Draw a change percentage in `[CHANGE_PCT_MIN, CHANGE_PCT_MAX]`.
    fn draw_change_pct(&self) -> f64;
}

/// Uniform draw over the closed change interval.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniformChange;

impl ChangeSource for UniformChange {
    fn draw_change_pct(&self) -> f64 {
        rand::rng().random_range(CHANGE_PCT_MIN..=CHANGE_PCT_MAX)
    }
}

/// Round to 4 decimal places, the precision quotes are served at.
pub(crate) fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Stateless quote generator.
///
/// Pure apart from its injected entropy sources: no shared mutable state,
/// no memoization, no dependence on prior calls. `generate` is total;
/// unknown symbols price off the catalog's default base price.
#[derive(Clone)]
pub struct QuoteGenerator {
    catalog: Arc<PriceCatalog>,
    clock: Arc<dyn Clock>,
    changes: Arc<dyn ChangeSource>,
}

impl QuoteGenerator {
    /// Generator with the production clock and uniform change source.
    pub fn new(catalog: Arc<PriceCatalog>) -> Self {
        Self::with_sources(catalog, Arc::new(SystemClock), Arc::new(UniformChange))
    }

    /// Generator with explicit entropy sources.
    pub fn with_sources(
        catalog: Arc<PriceCatalog>,
        clock: Arc<dyn Clock>,
        changes: Arc<dyn ChangeSource>,
    ) -> Self {
        Self {
            catalog,
            clock,
            changes,
        }
    }

    /// Generate a quote for any symbol.
    ///
    /// The change percentage is rounded to 4 decimals before it enters the
    /// price computation, and the timestamp is captured after the draw so
    /// `quoted_at` never precedes the randomization it stamps.
    pub fn generate(&self, symbol: &str) -> Quote {
        let symbol = Symbol::new(symbol);
        let base = self.catalog.lookup(symbol.as_str());

        let change_pct = round4(self.changes.draw_change_pct());
        let price = round4(base * (1.0 + change_pct / 100.0));
        let quoted_at = self.clock.now_utc();

        Quote {
            symbol,
            price,
            change_pct,
            quoted_at,
        }
    }

    /// The catalog this generator prices against.
    pub fn catalog(&self) -> &PriceCatalog {
        &self.catalog
    }

    /// Current instant from the injected clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now_utc()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

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

    fn fixed_generator(change_pct: f64) -> QuoteGenerator {
        let when = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        QuoteGenerator::with_sources(
            Arc::new(PriceCatalog::builtin()),
            Arc::new(FixedClock(when)),
            Arc::new(FixedChange(change_pct)),
        )
    }

    #[test]
    fn test_price_derives_from_change_pct_and_base_price() {
        let generator = QuoteGenerator::new(Arc::new(PriceCatalog::builtin()));

        let mut symbols: Vec<String> = generator
            .catalog()
            .all_symbols()
            .iter()
            .map(|s| s.as_str().to_string())
            .collect();
        symbols.push("ZZZZ".to_string());

        for symbol in &symbols {
            let quote = generator.generate(symbol);
            let base = generator.catalog().lookup(symbol);
            let expected = round4(base * (1.0 + quote.change_pct / 100.0));
            assert_eq!(quote.price, expected, "invariant broken for {}", symbol);
        }
    }

    #[test]
    fn test_change_pct_stays_within_bounds() {
        let generator = QuoteGenerator::new(Arc::new(PriceCatalog::builtin()));

        for _ in 0..1000 {
            let quote = generator.generate("AAPL");
            assert!(
                (CHANGE_PCT_MIN..=CHANGE_PCT_MAX).contains(&quote.change_pct),
                "change_pct {} out of bounds",
                quote.change_pct
            );
        }
    }

    #[test]
    fn test_change_pct_is_rounded_to_four_decimals() {
        let generator = QuoteGenerator::new(Arc::new(PriceCatalog::builtin()));

        for _ in 0..100 {
            let quote = generator.generate("MSFT");
            assert_eq!(quote.change_pct, round4(quote.change_pct));
            assert_eq!(quote.price, round4(quote.price));
        }
    }

    #[test]
    fn test_deterministic_with_fixed_sources() {
        let generator = fixed_generator(1.5);
        let quote = generator.generate("AAPL");

        // 190.0 * 1.015
        assert_eq!(quote.price, 192.85);
        assert_eq!(quote.change_pct, 1.5);
        assert_eq!(
            quote.quoted_at,
            Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_raw_draw_is_rounded_before_pricing() {
        let generator = fixed_generator(0.123456);
        let quote = generator.generate("BTCUSD");

        assert_eq!(quote.change_pct, 0.1235);
        assert_eq!(quote.price, round4(52_000.0 * (1.0 + 0.1235 / 100.0)));
    }

    #[test]
    fn test_unknown_symbol_prices_off_default_base() {
        let generator = fixed_generator(0.0);

        let quote = generator.generate("NOPE");
        assert_eq!(quote.price, 100.0);

        let quote = generator.generate("");
        assert_eq!(quote.price, 100.0);
        assert_eq!(quote.symbol.as_str(), "");
    }

    #[test]
    fn test_symbol_is_normalized_in_output() {
        let generator = fixed_generator(0.0);
        let quote = generator.generate("btcusd");
        assert_eq!(quote.symbol.as_str(), "BTCUSD");
    }

    #[test]
    fn test_consecutive_quotes_are_independent_draws() {
        let generator = QuoteGenerator::new(Arc::new(PriceCatalog::builtin()));

        // Independent uniform draws collide with negligible probability;
        // five in a row landing identical would mean the source is stuck.
        let prices: Vec<f64> = (0..5).map(|_| generator.generate("AAPL").price).collect();
        assert!(
            prices.iter().any(|p| *p != prices[0]),
            "five identical consecutive prices: {:?}",
            prices
        );
    }
}
