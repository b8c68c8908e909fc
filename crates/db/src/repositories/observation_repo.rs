//! Repository for the `weather` table.

use weatherdesk_core::types::DbId;

use crate::models::observation::{CreateObservation, Observation, UpdateObservation};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, city, start_date, end_date, temperature, windspeed, weathercode, map_link";

/// Provides CRUD operations for weather observations.
pub struct ObservationRepo;

impl ObservationRepo {
    /// Column names in table order; used as the CSV export header.
    pub const COLUMN_NAMES: [&'static str; 8] = [
        "id",
        "city",
        "start_date",
        "end_date",
        "temperature",
        "windspeed",
        "weathercode",
        "map_link",
    ];

    /// Insert a new observation, returning the created row.
    pub async fn create(
        pool: &DbPool,
        input: &CreateObservation,
    ) -> Result<Observation, sqlx::Error> {
        let query = format!(
            "INSERT INTO weather (city, start_date, end_date, temperature, windspeed, weathercode, map_link)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Observation>(&query)
            .bind(&input.city)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.temperature)
            .bind(input.windspeed)
            .bind(input.weathercode)
            .bind(&input.map_link)
            .fetch_one(pool)
            .await
    }

    /// List every observation in insertion order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Observation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM weather ORDER BY id");
        sqlx::query_as::<_, Observation>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update an observation. Only `Some` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateObservation,
    ) -> Result<Option<Observation>, sqlx::Error> {
        let query = format!(
            "UPDATE weather SET
                city = COALESCE(?2, city),
                temperature = COALESCE(?3, temperature)
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Observation>(&query)
            .bind(id)
            .bind(&input.city)
            .bind(input.temperature)
            .fetch_optional(pool)
            .await
    }

    /// Delete an observation by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM weather WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
