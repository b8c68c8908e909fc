//! REST client for the Open-Meteo geocoding and forecast endpoints.
//!
//! Wraps both HTTP APIs using [`reqwest`] and exposes them through the
//! provider capability traits from `weatherdesk_core`.

use std::time::Duration;

use async_trait::async_trait;
use weatherdesk_core::provider::{
    Coordinates, CurrentConditions, GeoPlace, Geocoder, ProviderError, WeatherSource,
};

use crate::messages::{ForecastResponse, SearchResponse};

pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1";
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1";

/// Endpoint and timeout settings for [`OpenMeteoClient`].
#[derive(Debug, Clone)]
pub struct OpenMeteoConfig {
    /// Base URL of the geocoding API, without trailing slash.
    pub geocoding_url: String,
    /// Base URL of the forecast API, without trailing slash.
    pub forecast_url: String,
    /// Upper bound for a single geocoding request.
    pub geocoding_timeout: Duration,
    /// Upper bound for a single forecast request.
    pub forecast_timeout: Duration,
}

impl Default for OpenMeteoConfig {
    fn default() -> Self {
        Self {
            geocoding_url: DEFAULT_GEOCODING_URL.to_string(),
            forecast_url: DEFAULT_FORECAST_URL.to_string(),
            geocoding_timeout: Duration::from_secs(5),
            forecast_timeout: Duration::from_secs(10),
        }
    }
}

/// HTTP client for the Open-Meteo APIs.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: reqwest::Client,
    config: OpenMeteoConfig,
}

impl OpenMeteoClient {
    pub fn new(config: OpenMeteoConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for sharing its connection pool).
    pub fn with_client(client: reqwest::Client, config: OpenMeteoConfig) -> Self {
        let config = OpenMeteoConfig {
            geocoding_url: config.geocoding_url.trim_end_matches('/').to_string(),
            forecast_url: config.forecast_url.trim_end_matches('/').to_string(),
            ..config
        };
        Self { client, config }
    }

    pub fn config(&self) -> &OpenMeteoConfig {
        &self.config
    }

    /// Search for places named `name`.
    ///
    /// Sends `GET /search?name=..&count=1&format=json`. Only the best match is
    /// requested because callers use the first result.
    pub async fn search_places(&self, name: &str) -> Result<SearchResponse, ProviderError> {
        let response = self
            .client
            .get(format!("{}/search", self.config.geocoding_url))
            .query(&[("name", name), ("count", "1"), ("format", "json")])
            .timeout(self.config.geocoding_timeout)
            .send()
            .await
            .map_err(transport_error)?;

        Self::parse_response(response).await
    }

    /// Fetch the current-conditions block for `coordinates`.
    ///
    /// Sends `GET /forecast?latitude=..&longitude=..&current_weather=true`.
    pub async fn fetch_forecast(
        &self,
        coordinates: Coordinates,
    ) -> Result<ForecastResponse, ProviderError> {
        let response = self
            .client
            .get(format!("{}/forecast", self.config.forecast_url))
            .query(&[
                ("latitude", coordinates.latitude.to_string()),
                ("longitude", coordinates.longitude.to_string()),
                ("current_weather", "true".to_string()),
            ])
            .timeout(self.config.forecast_timeout)
            .send()
            .await
            .map_err(transport_error)?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`ProviderError::Status`]
    /// containing the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ProviderError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ProviderError> {
        let response = Self::ensure_success(response).await?;
        let body = response.text().await.map_err(transport_error)?;
        serde_json::from_str(&body).map_err(|e| ProviderError::Decode(e.to_string()))
    }
}

#[async_trait]
impl Geocoder for OpenMeteoClient {
    async fn search(&self, name: &str) -> Result<Vec<GeoPlace>, ProviderError> {
        let places = self.search_places(name).await?.into_places();
        tracing::debug!(name, matches = places.len(), "Geocoding lookup completed");
        Ok(places)
    }
}

#[async_trait]
impl WeatherSource for OpenMeteoClient {
    async fn current_conditions(
        &self,
        coordinates: Coordinates,
    ) -> Result<Option<CurrentConditions>, ProviderError> {
        let forecast = self.fetch_forecast(coordinates).await?;
        tracing::debug!(
            latitude = coordinates.latitude,
            longitude = coordinates.longitude,
            has_current = forecast.current_weather.is_some(),
            "Forecast lookup completed"
        );
        Ok(forecast.current_weather.map(CurrentConditions::from))
    }
}

fn transport_error(err: reqwest::Error) -> ProviderError {
    ProviderError::Transport(err.to_string())
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
