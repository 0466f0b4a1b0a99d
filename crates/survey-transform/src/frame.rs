//! DataFrame helpers shared by the renamer and the field parsers.

use chrono::NaiveDate;
use polars::prelude::{Column, DataFrame, DataType, DateChunked, IntoColumn, IntoSeries};

use tracing::debug;

use survey_common::text_column;
use survey_model::source_header_for;

use crate::error::{Result, TransformError};

/// Fail with [`TransformError::ColumnNotFound`] unless `name` is present.
pub(crate) fn require_column(df: &DataFrame, name: &str) -> Result<()> {
    if df.column(name).is_err() {
        if let Some(header) = source_header_for(name) {
            debug!(column = name, header, "parser input missing; was the table renamed?");
        }
        return Err(TransformError::ColumnNotFound {
            column: name.to_string(),
        });
    }
    Ok(())
}

/// Read a column as optional text, one entry per row.
pub(crate) fn text_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    require_column(df, name)?;
    Ok(text_column(df, name)?)
}

/// Read a column as text, treating null cells as the empty answer.
pub(crate) fn answers(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    Ok(text_values(df, name)?
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

/// Build a 0/1 indicator column.
pub(crate) fn flag_column(name: &str, flags: impl IntoIterator<Item = bool>) -> Column {
    let values: Vec<i32> = flags.into_iter().map(i32::from).collect();
    Column::new(name.into(), values)
}

/// Build a Polars `Date` column from calendar dates.
pub(crate) fn date_column(name: &str, dates: impl IntoIterator<Item = NaiveDate>) -> Column {
    DateChunked::from_naive_date(name.into(), dates)
        .into_series()
        .into_column()
}

/// Count rows whose indicator is set.
pub(crate) fn count_flagged(df: &DataFrame, name: &str) -> Result<usize> {
    Ok(flag_values(df, name)?.into_iter().filter(|flag| *flag).count())
}

/// Read an indicator column back as booleans; null reads as unset.
pub(crate) fn flag_values(df: &DataFrame, name: &str) -> Result<Vec<bool>> {
    require_column(df, name)?;
    let column = df.column(name)?.cast(&DataType::Int32)?;
    Ok(column
        .i32()?
        .into_iter()
        .map(|value| value == Some(1))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_column_counts_from_epoch() {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        let next = NaiveDate::from_ymd_opt(1970, 1, 2).unwrap();
        let column = date_column("d", [epoch, next]);

        assert_eq!(column.dtype(), &DataType::Date);
        let physical = column.cast(&DataType::Int32).unwrap();
        let days = physical.i32().unwrap();
        assert_eq!(days.get(0), Some(0));
        assert_eq!(days.get(1), Some(1));
    }

    #[test]
    fn flag_column_encodes_zero_and_one() {
        let column = flag_column("f", [true, false, true]);
        let values = column.i32().unwrap();
        assert_eq!(values.get(0), Some(1));
        assert_eq!(values.get(1), Some(0));
        assert_eq!(values.get(2), Some(1));
    }
}
