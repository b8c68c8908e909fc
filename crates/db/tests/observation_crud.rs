//! Integration tests for the observation repository.
//!
//! Each test runs against a fresh SQLite file in a temporary directory with
//! the real migrations applied.

use chrono::NaiveDate;
use tempfile::TempDir;
use weatherdesk_db::models::observation::{CreateObservation, UpdateObservation};
use weatherdesk_db::repositories::ObservationRepo;
use weatherdesk_db::DbPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// The `TempDir` must outlive the pool, so both are returned.
async fn setup() -> (TempDir, DbPool) {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("weather.db").display());
    let pool = weatherdesk_db::create_pool(&url).await.unwrap();
    weatherdesk_db::run_migrations(&pool).await.unwrap();
    (dir, pool)
}

fn new_observation(city: &str) -> CreateObservation {
    CreateObservation {
        city: city.to_string(),
        start_date: None,
        end_date: None,
        temperature: 18.5,
        windspeed: 11.2,
        weathercode: 3,
        map_link: "https://www.openstreetmap.org/?mlat=1&mlon=2#map=10/1/2".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Bootstrap
// ---------------------------------------------------------------------------

#[tokio::test]
async fn migrations_are_idempotent() {
    let (_dir, pool) = setup().await;
    weatherdesk_db::run_migrations(&pool).await.unwrap();
    weatherdesk_db::health_check(&pool).await.unwrap();
}

#[tokio::test]
async fn table_columns_match_export_header() {
    let (_dir, pool) = setup().await;

    let columns: Vec<(String,)> = sqlx::query_as("SELECT name FROM pragma_table_info('weather')")
        .fetch_all(&pool)
        .await
        .unwrap();
    let names: Vec<&str> = columns.iter().map(|(name,)| name.as_str()).collect();

    assert_eq!(names, ObservationRepo::COLUMN_NAMES);
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_then_find_round_trips() {
    let (_dir, pool) = setup().await;

    let mut input = new_observation("Lisbon");
    input.start_date = NaiveDate::from_ymd_opt(2025, 5, 1);
    input.end_date = NaiveDate::from_ymd_opt(2025, 5, 3);

    let created = ObservationRepo::create(&pool, &input).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.city, "Lisbon");
    assert_eq!(created.start_date, input.start_date);
    assert_eq!(created.temperature, 18.5);

    let listed = ObservationRepo::list(&pool).await.unwrap();
    assert_eq!(listed, vec![created]);
}

#[tokio::test]
async fn list_returns_rows_in_insertion_order() {
    let (_dir, pool) = setup().await;
    assert!(ObservationRepo::list(&pool).await.unwrap().is_empty());

    let first = ObservationRepo::create(&pool, &new_observation("Oslo"))
        .await
        .unwrap();
    let second = ObservationRepo::create(&pool, &new_observation("Rome"))
        .await
        .unwrap();

    let rows = ObservationRepo::list(&pool).await.unwrap();
    assert_eq!(rows, vec![first, second]);
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
    let (_dir, pool) = setup().await;

    let first = ObservationRepo::create(&pool, &new_observation("Oslo"))
        .await
        .unwrap();
    assert!(ObservationRepo::delete(&pool, first.id).await.unwrap());

    let second = ObservationRepo::create(&pool, &new_observation("Oslo"))
        .await
        .unwrap();
    assert!(second.id > first.id);
}

#[tokio::test]
async fn update_applies_only_present_fields() {
    let (_dir, pool) = setup().await;
    let created = ObservationRepo::create(&pool, &new_observation("Paris"))
        .await
        .unwrap();

    let updated = ObservationRepo::update(
        &pool,
        created.id,
        &UpdateObservation {
            city: Some("Lyon".to_string()),
            temperature: None,
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.city, "Lyon");
    assert_eq!(updated.temperature, created.temperature);
    assert_eq!(updated.windspeed, created.windspeed);
}

#[tokio::test]
async fn update_with_zero_temperature_writes_zero() {
    let (_dir, pool) = setup().await;
    let created = ObservationRepo::create(&pool, &new_observation("Paris"))
        .await
        .unwrap();

    let updated = ObservationRepo::update(
        &pool,
        created.id,
        &UpdateObservation {
            city: None,
            temperature: Some(0.0),
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.temperature, 0.0);
    assert_eq!(updated.city, "Paris");
}

#[tokio::test]
async fn update_missing_row_returns_none() {
    let (_dir, pool) = setup().await;

    let result = ObservationRepo::update(&pool, 4242, &UpdateObservation::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn delete_reports_whether_a_row_was_removed() {
    let (_dir, pool) = setup().await;
    let created = ObservationRepo::create(&pool, &new_observation("Madrid"))
        .await
        .unwrap();

    assert!(ObservationRepo::delete(&pool, created.id).await.unwrap());
    assert!(!ObservationRepo::delete(&pool, created.id).await.unwrap());
    assert!(ObservationRepo::list(&pool).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Constraints
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_city_violates_check_constraint() {
    let (_dir, pool) = setup().await;

    let result = ObservationRepo::create(&pool, &new_observation("")).await;
    assert!(matches!(result, Err(sqlx::Error::Database(_))));
}

#[tokio::test]
async fn half_open_date_range_violates_check_constraint() {
    let (_dir, pool) = setup().await;

    let mut input = new_observation("Vienna");
    input.start_date = NaiveDate::from_ymd_opt(2025, 1, 1);

    let result = ObservationRepo::create(&pool, &input).await;
    assert!(matches!(result, Err(sqlx::Error::Database(_))));
}
