//! Location gate and current-weather fetch.

use serde::Serialize;

use crate::error::CoreError;
use crate::provider::{Coordinates, Geocoder, WeatherSource};

/// Zoom level used for the OpenStreetMap viewer link.
pub const MAP_ZOOM: u8 = 10;

pub const LOCATION_SERVICE_UNAVAILABLE: &str = "Location service unavailable. Try again later.";
pub const WEATHER_SERVICE_UNAVAILABLE: &str = "Weather service unavailable. Try again later.";
pub const CITY_NOT_FOUND: &str = "City not found.";
pub const WEATHER_DATA_NOT_FOUND: &str = "Weather data not found.";

/// Result of a successful fetch: where the city is and what it is like there
/// right now.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub temperature: f64,
    pub windspeed: f64,
    pub weathercode: i64,
    pub map_link: String,
}

/// Build the OpenStreetMap viewer URL centred on `coordinates`.
pub fn map_link(coordinates: Coordinates) -> String {
    let Coordinates {
        latitude,
        longitude,
    } = coordinates;
    format!(
        "https://www.openstreetmap.org/?mlat={latitude}&mlon={longitude}#map={MAP_ZOOM}/{latitude}/{longitude}"
    )
}

/// Confirm that `location` resolves to at least one place.
///
/// Any provider fault (transport error, timeout, non-2xx status, undecodable
/// body) is reported as [`CoreError::ServiceUnavailable`].
pub async fn validate_location(geocoder: &dyn Geocoder, location: &str) -> Result<(), CoreError> {
    let places = geocoder.search(location).await.map_err(|err| {
        tracing::warn!(error = %err, location, "Geocoding lookup failed");
        CoreError::ServiceUnavailable(LOCATION_SERVICE_UNAVAILABLE.to_string())
    })?;

    if places.is_empty() {
        return Err(CoreError::NotFound(format!("Location '{location}' not found.")));
    }

    Ok(())
}

/// Resolve `city` to coordinates (first match wins) and fetch its current
/// conditions. Metrics are passed through unchanged.
pub async fn fetch_current_weather(
    geocoder: &dyn Geocoder,
    weather: &dyn WeatherSource,
    city: &str,
) -> Result<WeatherReport, CoreError> {
    let places = geocoder.search(city).await.map_err(|err| {
        tracing::warn!(error = %err, city, "Geocoding lookup failed");
        CoreError::ServiceUnavailable(LOCATION_SERVICE_UNAVAILABLE.to_string())
    })?;

    let place = places
        .into_iter()
        .next()
        .ok_or_else(|| CoreError::NotFound(CITY_NOT_FOUND.to_string()))?;
    let coordinates = place.coordinates;

    let conditions = weather
        .current_conditions(coordinates)
        .await
        .map_err(|err| {
            tracing::warn!(error = %err, city, "Current weather lookup failed");
            CoreError::ServiceUnavailable(WEATHER_SERVICE_UNAVAILABLE.to_string())
        })?
        .ok_or_else(|| CoreError::NotFound(WEATHER_DATA_NOT_FOUND.to_string()))?;

    Ok(WeatherReport {
        city: city.to_string(),
        latitude: coordinates.latitude,
        longitude: coordinates.longitude,
        temperature: conditions.temperature,
        windspeed: conditions.windspeed,
        weathercode: conditions.weathercode,
        map_link: map_link(coordinates),
    })
}
