//! Polars value helpers.
//!
//! Survey exports are text, but a loader may hand over a frame where a column
//! was inferred as numeric (a college term column holding only digits, say).
//! These helpers read any cell back as the text the respondent typed.

use polars::prelude::{AnyValue, DataFrame, PolarsResult};

/// Converts a Polars `AnyValue` to a `String` representation.
///
/// Returns an empty string for `Null`, and formats floats without trailing
/// zeros so a term inferred as `7.0` reads back as `"7"`.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use survey_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int64(7)), "7");
/// assert_eq!(any_to_string(AnyValue::Float64(7.0)), "7");
/// assert_eq!(any_to_string(AnyValue::String("Sim")), "Sim");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Formats a floating-point number as a string without trailing zeros.
///
/// # Examples
///
/// ```
/// use survey_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.5), "1.5");
/// assert_eq!(format_numeric(0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Reads every cell of a column as optional text, one entry per row.
///
/// String columns are read directly; any other dtype goes through
/// [`any_to_string`]. Null cells stay `None`.
pub fn text_column(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<String>>> {
    let column = df.column(name)?;
    if let Ok(ca) = column.str() {
        return Ok(ca.into_iter().map(|v| v.map(str::to_string)).collect());
    }

    let mut values = Vec::with_capacity(column.len());
    for idx in 0..column.len() {
        let value = match column.get(idx)? {
            AnyValue::Null => None,
            other => Some(any_to_string(other)),
        };
        values.push(value);
    }
    Ok(values)
}
