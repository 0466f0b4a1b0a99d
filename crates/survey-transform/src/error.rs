//! Error types for the normalization pipeline.

use thiserror::Error;

use survey_model::REFERENCE_DATE_FORMAT;

/// Errors that abort a normalization run.
///
/// Unrecognized free text in the LER, disease and hours answers is never an
/// error; those answers resolve to zeroed indicator flags instead.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The raw table lacks one or more of the expected question headers.
    #[error("survey export is missing expected columns: {}", .columns.join("; "))]
    MissingColumns { columns: Vec<String> },

    /// The renamer was handed a table that already uses stable identifiers.
    #[error("table already uses normalized column names; the renamer only accepts raw survey headers")]
    AlreadyNormalized,

    /// A parser's input column is absent.
    #[error("column '{column}' not found in DataFrame")]
    ColumnNotFound { column: String },

    /// A submission timestamp does not match the export layout.
    #[error("row {row}: reference date '{value}' does not match {}", REFERENCE_DATE_FORMAT)]
    InvalidReferenceDate { row: usize, value: String },

    /// A submission timestamp is null.
    #[error("row {row}: reference date is missing")]
    MissingReferenceDate { row: usize },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for normalization operations.
pub type Result<T> = std::result::Result<T, TransformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_display() {
        let err = TransformError::InvalidReferenceDate {
            row: 3,
            value: "2023-03-15".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "row 3: reference date '2023-03-15' does not match %d/%m/%Y %H:%M:%S"
        );
    }

    #[test]
    fn test_missing_columns_display() {
        let err = TransformError::MissingColumns {
            columns: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "survey export is missing expected columns: a; b"
        );
    }
}
