//! Reference date parser.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use polars::prelude::DataFrame;
use regex::Regex;
use tracing::debug;

use survey_model::{REFERENCE_DATE_FORMAT, schema::field};

use crate::error::{Result, TransformError};
use crate::frame::{date_column, text_values};

/// Shape of a submission timestamp: one or two digit day, month and time
/// fields, a four digit year and a single space between date and time.
static REFERENCE_DATE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{1,2}/[0-9]{1,2}/[0-9]{4} [0-9]{1,2}:[0-9]{1,2}:[0-9]{1,2}$")
        .expect("Invalid reference date regex")
});

/// Parse a submission timestamp and keep only its calendar date.
///
/// The layout is strict: `DD/MM/YYYY HH:MM:SS`, no trimming and no fallback
/// formats. The shape is checked before chrono sees the text, since chrono
/// alone accepts short or signed years and a missing separator. The time of
/// day must be valid even though it is discarded; leap second `60` is not.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use survey_transform::parsers::parse_reference_date;
///
/// assert_eq!(
///     parse_reference_date("15/03/2023 14:30:00"),
///     NaiveDate::from_ymd_opt(2023, 3, 15)
/// );
/// assert_eq!(parse_reference_date("2023-03-15"), None);
/// assert_eq!(parse_reference_date("15/03/23 14:30:00"), None);
/// ```
pub fn parse_reference_date(value: &str) -> Option<NaiveDate> {
    if !REFERENCE_DATE_SHAPE.is_match(value) {
        return None;
    }
    NaiveDateTime::parse_from_str(value, REFERENCE_DATE_FORMAT)
        .ok()
        .filter(|timestamp| timestamp.nanosecond() < 1_000_000_000)
        .map(|timestamp| timestamp.date())
}

/// Replace `reference_date` with a `Date` column.
///
/// # Errors
///
/// The first null or malformed timestamp aborts the step; no partial table
/// is produced.
pub fn parse_reference_date_column(mut df: DataFrame) -> Result<DataFrame> {
    let values = text_values(&df, field::REFERENCE_DATE)?;

    let mut dates = Vec::with_capacity(values.len());
    for (row, value) in values.into_iter().enumerate() {
        let Some(value) = value else {
            return Err(TransformError::MissingReferenceDate { row });
        };
        let Some(date) = parse_reference_date(&value) else {
            return Err(TransformError::InvalidReferenceDate { row, value });
        };
        dates.push(date);
    }

    if let (Some(first), Some(last)) = (dates.iter().min(), dates.iter().max()) {
        debug!(%first, %last, "parsed reference dates");
    }

    df.with_column(date_column(field::REFERENCE_DATE, dates))?;
    Ok(df)
}
