//! CSV export of the whole `weather` table.

use axum::extract::State;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::IntoResponse;
use weatherdesk_core::csv_export;
use weatherdesk_db::repositories::ObservationRepo;

use crate::error::AppResult;
use crate::state::AppState;

pub const EXPORT_FILENAME: &str = "weather_data.csv";

/// GET /export
///
/// Header row is the table's column list; one line per stored record.
pub async fn export_csv(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let records = ObservationRepo::list(&state.pool).await?;
    let count = records.len();

    let body = csv_export::render(
        &ObservationRepo::COLUMN_NAMES,
        records.iter().map(|r| r.csv_fields()),
    );

    tracing::debug!(count, "Exported weather records as CSV");

    Ok((
        [
            (CONTENT_TYPE, "text/csv".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename={EXPORT_FILENAME}"),
            ),
        ],
        body,
    ))
}
