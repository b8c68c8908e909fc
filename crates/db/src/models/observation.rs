//! Weather observation entity model and DTOs.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use weatherdesk_core::types::DbId;

/// A row from the `weather` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Observation {
    pub id: DbId,
    pub city: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub temperature: f64,
    pub windspeed: f64,
    pub weathercode: i64,
    pub map_link: String,
}

impl Observation {
    /// Field values in table column order, formatted for CSV export.
    /// Absent dates become empty fields. REAL columns always carry a
    /// fractional part (`12.0`, not `12`), matching the JSON listing.
    pub fn csv_fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.city.clone(),
            self.start_date.map(|d| d.to_string()).unwrap_or_default(),
            self.end_date.map(|d| d.to_string()).unwrap_or_default(),
            format!("{:?}", self.temperature),
            format!("{:?}", self.windspeed),
            self.weathercode.to_string(),
            self.map_link.clone(),
        ]
    }
}

/// DTO for inserting a freshly fetched observation.
#[derive(Debug, Clone)]
pub struct CreateObservation {
    pub city: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub temperature: f64,
    pub windspeed: f64,
    pub weathercode: i64,
    pub map_link: String,
}

/// DTO for a partial update. `None` leaves the column untouched; `Some`
/// always writes, including `Some(0.0)`.
#[derive(Debug, Clone, Default)]
pub struct UpdateObservation {
    pub city: Option<String>,
    pub temperature: Option<f64>,
}
