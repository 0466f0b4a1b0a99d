//! Ergonomics survey normalization.
//!
//! Turns a raw questionnaire export (Portuguese question headers, free-text
//! answers) into a fixed typed table:
//!
//! - **rename**: question headers to stable field identifiers
//! - **parsers**: one parser per field, producing flags, dates and codes
//! - **pipeline**: the ordered composition and its report
//!
//! [`transform`] is the single entry point for callers.

pub mod error;
mod frame;
pub mod parsers;
pub mod pipeline;
pub mod rename;

pub use error::{Result, TransformError};
pub use parsers::ParseStep;
pub use pipeline::{NormalizationReport, NormalizedSurvey, transform, transform_with_report};
pub use rename::rename_columns;
