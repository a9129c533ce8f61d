//! HTTP request handlers for the quote API.

use crate::api::models::*;
use crate::service::QuoteService;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use observability::FeedMetrics;
use std::sync::Arc;

/// Shared state for quote API handlers.
pub struct QuoteApiState {
    pub service: QuoteService,
    pub metrics: FeedMetrics,
}

impl QuoteApiState {
    pub fn new(service: QuoteService) -> Self {
        Self {
            service,
            metrics: FeedMetrics::new(),
        }
    }
}

/// GET /preco
pub async fn get_random_quote(
    State(state): State<Arc<QuoteApiState>>,
) -> Json<InstrumentPriceResponse> {
    let picked = state.service.random_quote();
    state.metrics.record_request("preco", 1);

    Json(picked.into())
}

/// GET /precos
pub async fn get_all_quotes(
    State(state): State<Arc<QuoteApiState>>,
) -> Json<QuotesEnvelopeResponse> {
    let envelope = state.service.all_quotes();
    state
        .metrics
        .record_request("precos", envelope.quotes.len() as u64);

    Json((&envelope).into())
}

/// GET /quotes?symbols=BTCUSD,AAPL,PETR4
///
/// The `symbols` parameter is required; a request without it is a client
/// error and never reaches the generator. An empty or all-blank list is
/// fine and yields an envelope with zero quotes.
pub async fn get_quotes(
    State(state): State<Arc<QuoteApiState>>,
    Query(params): Query<QuotesParams>,
) -> Result<Json<QuotesEnvelopeResponse>, (StatusCode, Json<ErrorResponse>)> {
    let raw = params.symbols.ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                success: false,
                error: "Missing required query parameter: symbols".to_string(),
            }),
        )
    })?;

    let envelope = state.service.quotes_for(&raw);
    state
        .metrics
        .record_request("quotes", envelope.quotes.len() as u64);

    Ok(Json((&envelope).into()))
}
