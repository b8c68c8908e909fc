//! Static service metadata: the welcome page and `/info`.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::state::AppState;

pub const APP_NAME: &str = "Weather CRUD Service";
pub const DESCRIPTION: &str =
    "Fetches current weather for a city, stores it, and offers CRUD and CSV export.";

fn endpoints() -> Value {
    json!({
        "create": "POST /weather?city=&start_date=&end_date=",
        "list": "GET /weather",
        "update": "PUT /weather/{id}?city=&temperature=",
        "delete": "DELETE /weather/{id}",
        "export": "GET /export",
        "health": "GET /health",
        "info": "GET /info",
    })
}

/// GET /
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": format!("Welcome to the {APP_NAME}."),
        "description": DESCRIPTION,
        "info_endpoint": "/info",
        "endpoints": endpoints(),
    }))
}

/// GET /info
pub async fn info(State(state): State<AppState>) -> Json<Value> {
    let providers = &state.config.open_meteo;
    Json(json!({
        "app_name": APP_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "description": DESCRIPTION,
        "endpoints": endpoints(),
        "providers": {
            "geocoding": providers.geocoding_url,
            "forecast": providers.forecast_url,
        },
    }))
}
