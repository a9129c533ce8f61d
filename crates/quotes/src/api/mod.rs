//! HTTP surface for the quote producer.
//!
//! Thin transport adapter over [`QuoteService`](crate::service::QuoteService):
//! route definitions, handler functions, and the API-layer request/response
//! models. Any other transport (gRPC, CLI) would adapt the same service
//! calls.

pub mod handlers;
pub mod models;
pub mod routes;

pub use handlers::QuoteApiState;
pub use routes::quote_routes;
