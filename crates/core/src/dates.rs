//! Calendar date validation for observation records.
//!
//! Dates travel as `YYYY-MM-DD` strings on the wire and are stored as
//! [`NaiveDate`] (SQLite `TEXT`). A record carries either both dates or
//! neither.

use chrono::NaiveDate;

use crate::error::CoreError;

/// Wire format accepted for `start_date` / `end_date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const INVALID_DATE_FORMAT: &str = "Invalid date format. Use YYYY-MM-DD.";
pub const START_AFTER_END: &str = "Start date cannot be after end date.";
pub const INCOMPLETE_RANGE: &str = "start_date and end_date must be provided together.";

/// An ordered pair of calendar dates, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Build an optional range from the raw request parameters.
    ///
    /// Empty strings are treated the same as absent parameters. Supplying
    /// only one of the two bounds is rejected.
    pub fn from_params(
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<Option<DateRange>, CoreError> {
        let start = start.map(str::trim).filter(|s| !s.is_empty());
        let end = end.map(str::trim).filter(|s| !s.is_empty());

        match (start, end) {
            (None, None) => Ok(None),
            (Some(start), Some(end)) => validate_date_range(start, end).map(Some),
            _ => Err(CoreError::Validation(INCOMPLETE_RANGE.to_string())),
        }
    }
}

/// Parse both dates and check their order.
///
/// Equal dates are a valid (single-day) range.
pub fn validate_date_range(start: &str, end: &str) -> Result<DateRange, CoreError> {
    let start = parse_date(start)?;
    let end = parse_date(end)?;

    if start > end {
        return Err(CoreError::Validation(START_AFTER_END.to_string()));
    }

    Ok(DateRange { start, end })
}

fn parse_date(value: &str) -> Result<NaiveDate, CoreError> {
    if !has_date_shape(value) {
        return Err(CoreError::Validation(INVALID_DATE_FORMAT.to_string()));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| CoreError::Validation(INVALID_DATE_FORMAT.to_string()))
}

/// Four-digit year, then one- or two-digit month and day.
///
/// chrono's `%Y` also takes signed and longer years, which would sort wrongly
/// as stored text.
fn has_date_shape(value: &str) -> bool {
    let digits = |part: &str, min: usize, max: usize| {
        (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };

    let mut parts = value.split('-');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day), None) => {
            digits(year, 4, 4) && digits(month, 1, 2) && digits(day, 1, 2)
        }
        _ => false,
    }
}
