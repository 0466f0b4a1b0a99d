//! Survey normalization pipeline.
//!
//! The pipeline is a fixed sequence: the renamer, then every
//! [`ParseStep`] in [`ParseStep::ORDER`]. Each step consumes the previous
//! table and returns a new one with the same rows, so row count and row
//! order are conserved from the raw export to the final table.
//!
//! # Example
//!
//! ```ignore
//! use survey_transform::transform;
//!
//! let normalized = transform(&raw)?;
//! assert_eq!(normalized.height(), raw.height());
//! ```

use std::time::Instant;

use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span};

use survey_model::{Disease, HoursBucket, schema::field};

use crate::error::Result;
use crate::frame::{count_flagged, flag_values};
use crate::parsers::ParseStep;
use crate::rename::rename_columns;

/// Counts observed on a normalized table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationReport {
    /// Respondent rows in (and out of) the pipeline.
    pub rows: usize,
    /// Columns in the normalized table.
    pub columns: usize,
    /// Rows with `diagnosed_with_ler = 1`.
    pub diagnosed_with_ler: usize,
    /// Rows with `already_graduated = 1`.
    pub already_graduated: usize,
    /// Rows with `has_any_disease = 1`.
    pub with_any_disease: usize,
    /// Rows claiming a disease that matched no known label.
    pub unrecognized_diseases: usize,
    /// Rows whose hours answer matched no bucket.
    pub unmatched_hours: usize,
}

impl NormalizationReport {
    /// Derive the report from a fully normalized table.
    pub fn from_frame(df: &DataFrame) -> Result<Self> {
        let any_disease = flag_values(df, field::HAS_ANY_DISEASE)?;
        let mut specific_disease = vec![false; df.height()];
        for disease in Disease::ALL {
            for (row, flag) in flag_values(df, disease.column())?.into_iter().enumerate() {
                specific_disease[row] |= flag;
            }
        }

        let mut bucketed = vec![false; df.height()];
        for bucket in HoursBucket::ALL {
            for (row, flag) in flag_values(df, bucket.column())?.into_iter().enumerate() {
                bucketed[row] |= flag;
            }
        }

        Ok(Self {
            rows: df.height(),
            columns: df.width(),
            diagnosed_with_ler: count_flagged(df, field::DIAGNOSED_WITH_LER)?,
            already_graduated: count_flagged(df, field::ALREADY_GRADUATED)?,
            with_any_disease: any_disease.iter().filter(|flag| **flag).count(),
            unrecognized_diseases: any_disease
                .iter()
                .zip(&specific_disease)
                .filter(|(any, specific)| **any && !**specific)
                .count(),
            unmatched_hours: bucketed.iter().filter(|flag| !**flag).count(),
        })
    }

    /// True when some free-text answers fell through to default flags.
    pub fn has_gaps(&self) -> bool {
        self.unrecognized_diseases > 0 || self.unmatched_hours > 0
    }
}

/// Result of a pipeline run with its report.
#[derive(Debug, Clone)]
pub struct NormalizedSurvey {
    /// The normalized table.
    pub data: DataFrame,
    /// Counts observed on `data`.
    pub report: NormalizationReport,
}

/// Normalize a raw survey export into the final typed schema.
///
/// # Errors
///
/// Fails on a missing question header before any parsing, and on the first
/// malformed reference date. Unrecognized free text never fails.
pub fn transform(raw: &DataFrame) -> Result<DataFrame> {
    let span = info_span!("normalize", rows = raw.height());
    let _guard = span.enter();
    let start = Instant::now();

    let mut df = rename_columns(raw)?;
    debug!(columns = df.width(), "renamed survey columns");

    for step in ParseStep::ORDER {
        let step_span = info_span!("parse", step = step.display_name());
        df = step_span.in_scope(|| step.apply(df))?;
        debug!(
            step = step.display_name(),
            columns = df.width(),
            "applied parse step"
        );
    }

    info!(
        rows = df.height(),
        columns = df.width(),
        duration_ms = start.elapsed().as_millis(),
        "normalized survey"
    );
    Ok(df)
}

/// Normalize a raw survey export and report what the parsers saw.
pub fn transform_with_report(raw: &DataFrame) -> Result<NormalizedSurvey> {
    let data = transform(raw)?;
    let report = NormalizationReport::from_frame(&data)?;
    if report.has_gaps() {
        debug!(
            unrecognized_diseases = report.unrecognized_diseases,
            unmatched_hours = report.unmatched_hours,
            "free-text answers resolved to default flags"
        );
    }
    Ok(NormalizedSurvey { data, report })
}
