//! LER diagnosis parser.

use polars::prelude::DataFrame;
use tracing::debug;

use survey_model::{AFFIRMATIVE_ANSWER, schema::field};

use crate::error::Result;
use crate::frame::{answers, flag_column};

/// Closed yes/no classification: only the exact affirmative token counts.
///
/// There is no "unknown" outcome. Lowercase, blank or malformed answers all
/// read as "no".
///
/// # Examples
///
/// ```
/// use survey_transform::parsers::is_affirmative;
///
/// assert!(is_affirmative("Sim"));
/// assert!(!is_affirmative("sim"));
/// assert!(!is_affirmative("Não"));
/// assert!(!is_affirmative(""));
/// ```
pub fn is_affirmative(answer: &str) -> bool {
    answer == AFFIRMATIVE_ANSWER
}

/// Replace `diagnosed_with_ler` with a 0/1 flag.
pub fn parse_diagnosed_with_ler_column(mut df: DataFrame) -> Result<DataFrame> {
    let flags: Vec<bool> = answers(&df, field::DIAGNOSED_WITH_LER)?
        .iter()
        .map(|answer| is_affirmative(answer))
        .collect();

    let diagnosed = flags.iter().filter(|flag| **flag).count();
    debug!(diagnosed, rows = flags.len(), "parsed LER diagnosis");

    df.with_column(flag_column(field::DIAGNOSED_WITH_LER, flags))?;
    Ok(df)
}
