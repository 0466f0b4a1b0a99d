//! Data model for the computer-use ergonomics survey.
//!
//! - [`schema`]: source question headers, stable identifiers and the final
//!   column order of a normalized table
//! - [`vocabulary`]: the closed answer vocabularies (diseases, daily hours on
//!   the computer) and the fixed answer tokens

pub mod schema;
pub mod vocabulary;

pub use schema::{
    ColumnMapping, FINAL_COLUMNS, NORMALIZED_COLUMNS, SOURCE_COLUMNS, field, source_header_for,
};
pub use vocabulary::{
    AFFIRMATIVE_ANSWER, AGE_UNIT, CHOICE_SEPARATOR, Disease, HOURS_UNIT, HoursBucket,
    NO_DISEASE_ANSWER, REFERENCE_DATE_FORMAT,
};
