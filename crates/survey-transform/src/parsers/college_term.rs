//! College term parser.

use polars::prelude::{Column, DataFrame};
use serde::{Deserialize, Serialize};

use survey_model::schema::field;

use crate::error::Result;
use crate::frame::{answers, flag_column};

/// Outcome of a college term answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollegeTerm {
    /// The respondent is enrolled; holds the term digits.
    Enrolled(String),
    /// The answer is not a number, so the respondent has graduated.
    Graduated,
}

impl CollegeTerm {
    /// Classify an answer: a non-empty all-numeric answer is a term, anything
    /// else (including blank) means already graduated.
    ///
    /// # Examples
    ///
    /// ```
    /// use survey_transform::parsers::CollegeTerm;
    ///
    /// assert_eq!(CollegeTerm::from_answer("7"), CollegeTerm::Enrolled("7".into()));
    /// assert_eq!(CollegeTerm::from_answer("Já formado"), CollegeTerm::Graduated);
    /// ```
    pub fn from_answer(answer: &str) -> Self {
        if !answer.is_empty() && answer.chars().all(char::is_numeric) {
            Self::Enrolled(answer.to_string())
        } else {
            Self::Graduated
        }
    }

    pub fn is_graduated(&self) -> bool {
        matches!(self, Self::Graduated)
    }

    /// The term digits, absent once graduated.
    pub fn term(&self) -> Option<&str> {
        match self {
            Self::Enrolled(term) => Some(term),
            Self::Graduated => None,
        }
    }
}

/// Split `college_term` into the term digits (null once graduated) and an
/// appended `already_graduated` flag.
pub fn parse_college_term(mut df: DataFrame) -> Result<DataFrame> {
    let terms: Vec<CollegeTerm> = answers(&df, field::COLLEGE_TERM)?
        .iter()
        .map(|answer| CollegeTerm::from_answer(answer))
        .collect();

    df.with_column(flag_column(
        field::ALREADY_GRADUATED,
        terms.iter().map(CollegeTerm::is_graduated),
    ))?;
    let term_values: Vec<Option<&str>> = terms.iter().map(CollegeTerm::term).collect();
    df.with_column(Column::new(field::COLLEGE_TERM.into(), term_values))?;
    Ok(df)
}
