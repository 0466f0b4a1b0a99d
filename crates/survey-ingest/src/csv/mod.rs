//! CSV loading for survey exports.

mod header;
mod reader;

pub use header::normalize_header;
pub use reader::{read_survey_csv, validate_encoding};
