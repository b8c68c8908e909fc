//! Handlers for the `/weather` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;
use weatherdesk_core::dates::DateRange;
use weatherdesk_core::error::CoreError;
use weatherdesk_core::types::DbId;
use weatherdesk_core::weather::{self, WeatherReport};
use weatherdesk_db::models::observation::{CreateObservation, Observation, UpdateObservation};
use weatherdesk_db::repositories::ObservationRepo;

use crate::error::{AppError, AppResult};
use crate::query::{CreateWeatherParams, UpdateWeatherParams};
use crate::response::{DataResponse, ListResponse, MessageResponse};
use crate::state::AppState;

pub const EMPTY_CITY: &str = "City must not be empty.";
pub const INVALID_TEMPERATURE: &str = "Temperature must be a finite number.";

/// Payload returned by a successful create.
#[derive(Debug, Serialize)]
pub struct CreatedWeather {
    pub id: DbId,
    #[serde(flatten)]
    pub report: WeatherReport,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Trim `city` and reject it when nothing is left.
fn require_city(city: Option<&str>) -> AppResult<String> {
    match city.map(str::trim) {
        Some(city) if !city.is_empty() => Ok(city.to_string()),
        _ => Err(AppError::BadRequest(EMPTY_CITY.into())),
    }
}

/// Parse the `temperature` query value. SQLite stores NaN as NULL, so
/// non-finite values are rejected along with malformed ones.
fn parse_temperature(raw: &str) -> AppResult<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|t| t.is_finite())
        .ok_or_else(|| AppError::BadRequest(INVALID_TEMPERATURE.into()))
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// POST /weather?city=&start_date=&end_date=
///
/// Validates the request locally, confirms the city exists, fetches its
/// current conditions and stores one record.
pub async fn create_weather(
    State(state): State<AppState>,
    Query(params): Query<CreateWeatherParams>,
) -> AppResult<Json<DataResponse<CreatedWeather>>> {
    let city = require_city(params.city.as_deref())?;
    let range = DateRange::from_params(params.start_date.as_deref(), params.end_date.as_deref())?;

    weather::validate_location(state.geocoder.as_ref(), &city).await?;
    let report =
        weather::fetch_current_weather(state.geocoder.as_ref(), state.weather.as_ref(), &city)
            .await?;

    let input = CreateObservation {
        city: report.city.clone(),
        start_date: range.map(|r| r.start),
        end_date: range.map(|r| r.end),
        temperature: report.temperature,
        windspeed: report.windspeed,
        weathercode: report.weathercode,
        map_link: report.map_link.clone(),
    };
    let record = ObservationRepo::create(&state.pool, &input).await?;

    tracing::info!(id = record.id, city = %record.city, "Weather record created");

    Ok(Json(DataResponse::success(CreatedWeather {
        id: record.id,
        report,
    })))
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

/// GET /weather
pub async fn list_weather(
    State(state): State<AppState>,
) -> AppResult<Json<ListResponse<Observation>>> {
    let records = ObservationRepo::list(&state.pool).await?;
    Ok(Json(ListResponse::from(records)))
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

/// PUT /weather/{id}?city=&temperature=
///
/// Only the parameters present in the query string are written.
pub async fn update_weather(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<UpdateWeatherParams>,
) -> AppResult<Json<MessageResponse>> {
    let city = match params.city.as_deref() {
        Some(raw) => Some(require_city(Some(raw))?),
        None => None,
    };
    let temperature = params
        .temperature
        .as_deref()
        .map(parse_temperature)
        .transpose()?;

    let input = UpdateObservation { city, temperature };
    ObservationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::NotFound(format!("Record {id} not found.")))?;

    tracing::info!(id, "Weather record updated");

    Ok(Json(MessageResponse::success(format!("Record {id} updated."))))
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

/// DELETE /weather/{id}
///
/// Idempotent: deleting an id that does not exist still succeeds.
pub async fn delete_weather(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let removed = ObservationRepo::delete(&state.pool, id).await?;
    if removed {
        tracing::info!(id, "Weather record deleted");
    } else {
        tracing::debug!(id, "Delete requested for missing weather record");
    }

    Ok(Json(MessageResponse::success(format!("Record {id} deleted."))))
}
