//! Open-Meteo response payloads.
//!
//! Only the fields weatherdesk reads are modelled; everything else in the
//! responses is ignored by serde.

use serde::Deserialize;
use weatherdesk_core::provider::{Coordinates, CurrentConditions, GeoPlace};

/// Body of `GET /v1/search` on the geocoding API.
///
/// Open-Meteo omits `results` entirely when nothing matched.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Option<Vec<SearchResult>>,
}

/// One geocoding match.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub country: Option<String>,
}

/// Body of `GET /v1/forecast?current_weather=true`.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub current_weather: Option<CurrentWeather>,
}

/// The `current_weather` block of a forecast response.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub windspeed: f64,
    pub weathercode: i64,
}

impl SearchResponse {
    pub fn into_places(self) -> Vec<GeoPlace> {
        self.results
            .unwrap_or_default()
            .into_iter()
            .map(GeoPlace::from)
            .collect()
    }
}

impl From<SearchResult> for GeoPlace {
    fn from(result: SearchResult) -> Self {
        GeoPlace {
            name: result.name,
            coordinates: Coordinates {
                latitude: result.latitude,
                longitude: result.longitude,
            },
            country: result.country,
        }
    }
}

impl From<CurrentWeather> for CurrentConditions {
    fn from(current: CurrentWeather) -> Self {
        CurrentConditions {
            temperature: current.temperature,
            windspeed: current.windspeed,
            weathercode: current.weathercode,
        }
    }
}
