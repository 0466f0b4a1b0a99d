//! Survey export ingestion.
//!
//! Loads a spreadsheet export (saved as CSV) into a Polars `DataFrame` whose
//! columns are all text, so every answer reaches the normalization pipeline
//! exactly as the respondent's form recorded it.

pub mod csv;
pub mod error;
pub mod options;

pub use csv::{normalize_header, read_survey_csv, validate_encoding};
pub use error::{IngestError, Result};
pub use options::IngestOptions;
