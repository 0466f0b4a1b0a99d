//! Field parsers.
//!
//! Each parser reads one renamed column and replaces or expands it. Row-level
//! work is a pure function from the answer text to a small value
//! (`bool`, [`DiseaseFlags`], [`CollegeTerm`], ...); the table-level wrapper
//! turns those values into columns and merges them into the frame.

pub mod age_group;
pub mod college_term;
pub mod diseases;
pub mod hours;
pub mod ler;
pub mod reference_date;

use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use age_group::{normalize_age_group, parse_age_group_column};
pub use college_term::{CollegeTerm, parse_college_term};
pub use diseases::{DiseaseFlags, parse_diseases};
pub use hours::{
    HoursFlags, normalize_hours_on_computer, parse_hours_on_computer,
    parse_hours_on_computer_to_buckets,
};
pub use ler::{is_affirmative, parse_diagnosed_with_ler_column};
pub use reference_date::{parse_reference_date, parse_reference_date_column};

/// One field parsing step of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParseStep {
    /// `diagnosed_with_ler` to a 0/1 flag.
    DiagnosedWithLer,
    /// `age_group` stripped to digits.
    AgeGroup,
    /// `hours_on_computer` stripped to a range token.
    HoursOnComputerText,
    /// `reference_date` parsed to a calendar date.
    ReferenceDate,
    /// `diseases` expanded into indicator flags.
    Diseases,
    /// `college_term` split into term and graduation flag.
    CollegeTerm,
    /// `hours_on_computer` token expanded into bucket flags.
    HoursOnComputerBuckets,
}

impl ParseStep {
    /// Execution order of the pipeline.
    pub const ORDER: [ParseStep; 7] = [
        ParseStep::DiagnosedWithLer,
        ParseStep::AgeGroup,
        ParseStep::HoursOnComputerText,
        ParseStep::ReferenceDate,
        ParseStep::Diseases,
        ParseStep::CollegeTerm,
        ParseStep::HoursOnComputerBuckets,
    ];

    /// Returns a human-readable display name for the step.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::DiagnosedWithLer => "LER diagnosis",
            Self::AgeGroup => "Age group",
            Self::HoursOnComputerText => "Hours on computer (text)",
            Self::ReferenceDate => "Reference date",
            Self::Diseases => "Diseases",
            Self::CollegeTerm => "College term",
            Self::HoursOnComputerBuckets => "Hours on computer (buckets)",
        }
    }

    /// Run the step on a table.
    pub fn apply(&self, df: DataFrame) -> Result<DataFrame> {
        match self {
            Self::DiagnosedWithLer => parse_diagnosed_with_ler_column(df),
            Self::AgeGroup => parse_age_group_column(df),
            Self::HoursOnComputerText => parse_hours_on_computer(df),
            Self::ReferenceDate => parse_reference_date_column(df),
            Self::Diseases => parse_diseases(df),
            Self::CollegeTerm => parse_college_term(df),
            Self::HoursOnComputerBuckets => parse_hours_on_computer_to_buckets(df),
        }
    }
}
