use crate::CatalogEntry;

pub fn default_base_price() -> f64 {
    100.0
}

pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub fn default_http_port() -> u16 {
    8087
}

/// The built-in feed set used when no catalog is configured.
pub fn default_instruments() -> Vec<CatalogEntry> {
    vec![
        entry("BTCUSD", 52_000.0),
        entry("ETHUSD", 2_800.0),
        entry("AAPL", 190.0),
        entry("MSFT", 410.0),
        entry("PETR4", 38.0),
        entry("VALE3", 70.0),
    ]
}

fn entry(symbol: &str, base_price: f64) -> CatalogEntry {
    CatalogEntry {
        symbol: symbol.to_string(),
        base_price,
    }
}
