//! # LoanTrail API
//!
//! HTTP surface of the activity tracker. Thin handlers over the core
//! services; all business rules live in `loantrail-core`.

pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use state::AppState;

/// Build the application [`Router`].
///
/// Shared by the production binary and the handler tests so both run the
/// same middleware stack.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::api_routes())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
