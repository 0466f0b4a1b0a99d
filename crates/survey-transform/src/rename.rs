//! Column renamer.
//!
//! Maps the long question headers of a survey export onto stable field
//! identifiers and drops every column the survey schema does not know.

use polars::prelude::{Column, DataFrame};
use tracing::debug;

use survey_model::{NORMALIZED_COLUMNS, SOURCE_COLUMNS};

use crate::error::{Result, TransformError};

/// Select and rename the ten recognized survey columns.
///
/// The output holds exactly [`NORMALIZED_COLUMNS`], in that order, with
/// values copied unchanged. Extra input columns are discarded.
///
/// # Errors
///
/// - [`TransformError::MissingColumns`] listing every absent question header.
/// - [`TransformError::AlreadyNormalized`] when the table carries the stable
///   identifiers instead of the question headers. Renaming is not idempotent:
///   only raw exports are accepted.
pub fn rename_columns(df: &DataFrame) -> Result<DataFrame> {
    let missing: Vec<String> = SOURCE_COLUMNS
        .iter()
        .filter(|mapping| df.column(mapping.source).is_err())
        .map(|mapping| mapping.source.to_string())
        .collect();

    if !missing.is_empty() {
        let already_normalized = NORMALIZED_COLUMNS
            .iter()
            .all(|name| df.column(name).is_ok());
        if already_normalized && missing.len() == SOURCE_COLUMNS.len() {
            return Err(TransformError::AlreadyNormalized);
        }
        return Err(TransformError::MissingColumns { columns: missing });
    }

    let mut columns: Vec<Column> = Vec::with_capacity(SOURCE_COLUMNS.len());
    for mapping in &SOURCE_COLUMNS {
        let column = df.column(mapping.source)?.clone();
        columns.push(column.with_name(mapping.target.into()));
    }

    let dropped = df.width().saturating_sub(SOURCE_COLUMNS.len());
    if dropped > 0 {
        debug!(dropped, "discarded unrecognized survey columns");
    }

    Ok(DataFrame::new(columns)?)
}
