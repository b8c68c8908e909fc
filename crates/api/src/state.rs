use std::sync::Arc;

use weatherdesk_core::provider::{Geocoder, WeatherSource};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: weatherdesk_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Place-name lookup used by the location gate and the weather fetch.
    pub geocoder: Arc<dyn Geocoder>,
    /// Current-conditions provider.
    pub weather: Arc<dyn WeatherSource>,
}
