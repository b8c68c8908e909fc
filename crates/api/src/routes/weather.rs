use axum::routing::{get, put};
use axum::Router;

use crate::handlers::weather;
use crate::state::AppState;

/// Routes for the `/weather` resource.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/weather",
            get(weather::list_weather).post(weather::create_weather),
        )
        .route(
            "/weather/{id}",
            put(weather::update_weather).delete(weather::delete_weather),
        )
}
