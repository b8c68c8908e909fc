//! Open-Meteo provider for weatherdesk.
//!
//! Implements the [`Geocoder`](weatherdesk_core::provider::Geocoder) and
//! [`WeatherSource`](weatherdesk_core::provider::WeatherSource) capability
//! traits on top of the free Open-Meteo geocoding and forecast APIs.

pub mod api;
pub mod messages;

pub use api::{OpenMeteoClient, OpenMeteoConfig};
