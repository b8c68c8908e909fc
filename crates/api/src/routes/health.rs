use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// `/health`, mounted next to the public routes by the router builder.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
