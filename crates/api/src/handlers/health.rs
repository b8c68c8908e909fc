//! Liveness probe.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl Health {
    fn from_probe(db_healthy: bool) -> Self {
        Self {
            status: if db_healthy { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }
}

/// GET /health
///
/// Always answers 200; a failed `SELECT 1` only flips the body to `degraded`.
pub async fn health(State(state): State<AppState>) -> Json<Health> {
    let probe = weatherdesk_db::health_check(&state.pool).await;
    if let Err(err) = &probe {
        tracing::warn!(error = %err, "Database health probe failed");
    }
    Json(Health::from_probe(probe.is_ok()))
}
