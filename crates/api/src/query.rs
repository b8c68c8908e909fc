//! Query parameter types for the `/weather` endpoints.
//!
//! The endpoints take their inputs from the query string. Every field is
//! optional at the deserialization layer so that missing or empty values are
//! reported by the handlers with the standard JSON error body.

use serde::Deserialize;

/// `POST /weather?city=&start_date=&end_date=`
#[derive(Debug, Deserialize)]
pub struct CreateWeatherParams {
    pub city: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// `PUT /weather/{id}?city=&temperature=`
///
/// Presence is what matters: `temperature=0` is an explicit new value, an
/// omitted `temperature` leaves the column untouched. The temperature is kept
/// as text here and parsed by the handler so a malformed number gets the JSON
/// error body instead of a plain-text extractor rejection.
#[derive(Debug, Deserialize)]
pub struct UpdateWeatherParams {
    pub city: Option<String>,
    pub temperature: Option<String>,
}
