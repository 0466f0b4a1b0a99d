//! Command implementations.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use survey_ingest::{IngestOptions, read_survey_csv};
use survey_transform::{NormalizationReport, transform_with_report};

use crate::output::{default_output_path, write_csv, write_report_json};

/// Inputs of the `normalize` command.
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Survey export to read.
    pub input: PathBuf,
    /// Destination CSV; defaults to `<input stem>_normalized.csv`.
    pub output: Option<PathBuf>,
    /// Optional JSON report destination.
    pub report: Option<PathBuf>,
    /// CSV loading options.
    pub ingest: IngestOptions,
    /// Normalize and report without writing any file.
    pub dry_run: bool,
}

/// Outcome of the `normalize` command.
#[derive(Debug)]
pub struct NormalizeResult {
    pub input: PathBuf,
    /// Written CSV, absent on a dry run.
    pub output: Option<PathBuf>,
    /// Written JSON report, if requested and not a dry run.
    pub report_path: Option<PathBuf>,
    pub report: NormalizationReport,
}

/// Load a survey export, normalize it and write the results.
pub fn run_normalize(options: &NormalizeOptions) -> Result<NormalizeResult> {
    let span = info_span!("survey", input = %options.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let raw = read_survey_csv(&options.input, &options.ingest)
        .with_context(|| format!("load {}", options.input.display()))?;
    let normalized = transform_with_report(&raw).context("normalize survey")?;
    let mut data = normalized.data;
    let report = normalized.report;

    let mut output = None;
    let mut report_path = None;
    if options.dry_run {
        info!("dry run, no files written");
    } else {
        let path = options
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&options.input));
        write_csv(&mut data, &path)?;
        output = Some(path);

        if let Some(path) = &options.report {
            write_report_json(&report, path)?;
            report_path = Some(path.clone());
        }
    }

    info!(
        rows = report.rows,
        duration_ms = start.elapsed().as_millis(),
        "survey normalized"
    );

    Ok(NormalizeResult {
        input: options.input.clone(),
        output,
        report_path,
        report,
    })
}
