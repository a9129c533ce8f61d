//! Axum route definitions for the quote API.

use crate::api::handlers::{self, QuoteApiState};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

/// Create all quote routes.
///
/// # Routes
///
/// - `GET /preco` - One random catalog quote (reduced projection)
/// - `GET /precos` - Every catalog quote, in catalog order
/// - `GET /quotes` - Quotes for a required `symbols` list
pub fn quote_routes(state: Arc<QuoteApiState>) -> Router {
    Router::new()
        .route("/preco", get(handlers::get_random_quote))
        .route("/precos", get(handlers::get_all_quotes))
        .route("/quotes", get(handlers::get_quotes))
        .with_state(state)
}
