//! Capability traits for the two upstream providers.
//!
//! The handlers never talk to the network directly: they receive an
//! `Arc<dyn Geocoder>` and an `Arc<dyn WeatherSource>` through application
//! state. Production wires in the Open-Meteo client; tests wire in fakes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A latitude / longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One candidate returned by a geocoding lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPlace {
    pub name: String,
    pub coordinates: Coordinates,
    pub country: Option<String>,
}

/// Current conditions reported by the weather provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Air temperature in degrees Celsius.
    pub temperature: f64,
    /// Wind speed in km/h.
    pub windspeed: f64,
    /// WMO weather interpretation code.
    pub weathercode: i64,
}

/// Errors raised by provider implementations.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The request never produced a response (DNS, TLS, connect, timeout).
    #[error("request failed: {0}")]
    Transport(String),

    /// The provider answered with a non-2xx status.
    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be decoded.
    #[error("could not decode provider response: {0}")]
    Decode(String),
}

/// Resolves a free-text place name to candidate locations.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Look up `name`. An empty vector means the provider knows no such place.
    async fn search(&self, name: &str) -> Result<Vec<GeoPlace>, ProviderError>;
}

/// Reports current weather conditions at a coordinate.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// `Ok(None)` means the provider answered but carried no current-conditions
    /// payload.
    async fn current_conditions(
        &self,
        coordinates: Coordinates,
    ) -> Result<Option<CurrentConditions>, ProviderError>;
}
