pub mod health;
pub mod weather;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the public route tree.
///
/// ```text
/// /                 welcome
/// /info             service metadata
/// /weather          create (POST), list (GET)
/// /weather/{id}     update (PUT), delete (DELETE)
/// /export           CSV download
/// ```
///
/// `/health` is mounted separately by the router builder.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::info::root))
        .route("/info", get(handlers::info::info))
        .route("/export", get(handlers::export::export_csv))
        .merge(weather::router())
}
