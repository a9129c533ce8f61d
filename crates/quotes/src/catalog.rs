//! Reference price catalog.
//!
//! An immutable symbol → base price mapping built once at startup and
//! shared read-only across requests. Lookup never fails: unknown symbols
//! resolve to the catalog's default base price, which keeps the generator
//! total over arbitrary caller input.

use crate::types::Symbol;
use config::CatalogConfig;
use std::collections::HashMap;
use tracing::warn;

/// Immutable mapping from instrument symbol to reference price.
///
/// Enumeration order is the configuration order, fixed for the life of the
/// process. The catalog is never empty: an empty instrument list falls back
/// to the built-in feed set.
pub struct PriceCatalog {
    /// Symbols in serving order.
    symbols: Vec<Symbol>,
    prices: HashMap<Symbol, f64>,
    default_base_price: f64,
}

impl PriceCatalog {
    /// Build the catalog from configuration.
    ///
    /// Duplicate symbols keep the first entry so the serving order stays
    /// stable regardless of how the config lists repeats.
    pub fn from_config(cfg: &CatalogConfig) -> Self {
        let entries = if cfg.instruments.is_empty() {
            warn!("Catalog config has no instruments, using built-in feed set");
            config::default_instruments()
        } else {
            cfg.instruments.clone()
        };

        let mut symbols = Vec::with_capacity(entries.len());
        let mut prices = HashMap::with_capacity(entries.len());

        for entry in &entries {
            let symbol = Symbol::new(&entry.symbol);
            if prices.contains_key(&symbol) {
                warn!(symbol = %symbol, "Duplicate catalog symbol, keeping first entry");
                continue;
            }
            symbols.push(symbol.clone());
            prices.insert(symbol, entry.base_price);
        }

        Self {
            symbols,
            prices,
            default_base_price: cfg.default_base_price,
        }
    }

    /// Catalog with the built-in feed set and standard default base price.
    pub fn builtin() -> Self {
        Self::from_config(&CatalogConfig::default())
    }

    /// Resolve a symbol to its reference price.
    ///
    /// Case-insensitive. Unknown symbols (including the empty string)
    /// resolve to the default base price instead of signaling an error;
    /// this operation is total.
    pub fn lookup(&self, symbol: &str) -> f64 {
        let symbol = Symbol::new(symbol);
        self.prices
            .get(&symbol)
            .copied()
            .unwrap_or(self.default_base_price)
    }

    /// True if the symbol is a catalog entry (after normalization).
    pub fn contains(&self, symbol: &str) -> bool {
        self.prices.contains_key(&Symbol::new(symbol))
    }

    /// Every catalog symbol in serving order.
    pub fn all_symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Number of catalog entries.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// True if the catalog has no entries. Never the case for catalogs
    /// built through `from_config`.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Base price used for symbols outside the catalog.
    pub fn default_base_price(&self) -> f64 {
        self.default_base_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::CatalogEntry;

    fn catalog_from(entries: Vec<(&str, f64)>) -> PriceCatalog {
        PriceCatalog::from_config(&CatalogConfig {
            default_base_price: 100.0,
            instruments: entries
                .into_iter()
                .map(|(symbol, base_price)| CatalogEntry {
                    symbol: symbol.to_string(),
                    base_price,
                })
                .collect(),
        })
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = PriceCatalog::builtin();
        assert_eq!(catalog.lookup("AAPL"), catalog.lookup("aapl"));
        assert_eq!(catalog.lookup("AAPL"), catalog.lookup("AaPl"));
        assert_eq!(catalog.lookup("btcusd"), 52_000.0);
    }

    #[test]
    fn test_unknown_symbol_resolves_to_default_base_price() {
        let catalog = PriceCatalog::builtin();
        assert_eq!(catalog.lookup("ZZZZ"), 100.0);
        assert_eq!(catalog.lookup(""), 100.0);
    }

    #[test]
    fn test_all_symbols_preserves_config_order() {
        let catalog = catalog_from(vec![("GGBR4", 20.0), ("AAPL", 190.0), ("ABEV3", 14.0)]);
        let symbols: Vec<&str> = catalog.all_symbols().iter().map(|s| s.as_str()).collect();
        assert_eq!(symbols, vec!["GGBR4", "AAPL", "ABEV3"]);
    }

    #[test]
    fn test_duplicate_symbols_keep_first_entry() {
        let catalog = catalog_from(vec![("AAPL", 190.0), ("aapl", 999.0)]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.lookup("AAPL"), 190.0);
    }

    #[test]
    fn test_empty_config_falls_back_to_builtin_feed_set() {
        let catalog = PriceCatalog::from_config(&CatalogConfig {
            default_base_price: 100.0,
            instruments: Vec::new(),
        });
        assert_eq!(catalog.len(), 6);
        assert!(catalog.contains("BTCUSD"));
        assert!(catalog.contains("VALE3"));
    }

    #[test]
    fn test_custom_default_base_price() {
        let catalog = PriceCatalog::from_config(&CatalogConfig {
            default_base_price: 250.0,
            instruments: vec![CatalogEntry {
                symbol: "AAPL".to_string(),
                base_price: 190.0,
            }],
        });
        assert_eq!(catalog.lookup("UNKNOWN"), 250.0);
    }
}
