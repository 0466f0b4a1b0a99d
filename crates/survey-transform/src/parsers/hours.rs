//! Hours-on-computer parsers.
//!
//! Two steps share the `hours_on_computer` column: the text normalizer
//! strips the answer down to a range token, and the bucket parser later
//! expands that token into five indicator flags and drops the column.

use polars::prelude::{Column, DataFrame};
use serde::{Deserialize, Serialize};
use tracing::debug;

use survey_model::{HOURS_UNIT, HoursBucket, schema::field};

use crate::error::Result;
use crate::frame::{answers, flag_column};

/// Strip every unit character and all whitespace from an hours answer.
///
/// Known phrasings reduce to a [`HoursBucket`] token; anything else is
/// returned stripped but otherwise unrecognized.
///
/// # Examples
///
/// ```
/// use survey_transform::parsers::normalize_hours_on_computer;
///
/// assert_eq!(normalize_hours_on_computer("3-5h"), "3-5");
/// assert_eq!(normalize_hours_on_computer("< 1h"), "<1");
/// assert_eq!(normalize_hours_on_computer("> 8 h"), ">8");
/// ```
pub fn normalize_hours_on_computer(answer: &str) -> String {
    answer
        .replace(HOURS_UNIT, "")
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect()
}

/// Bucket flags derived from one normalized hours token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursFlags {
    /// Matched bucket; `None` when the token is outside the vocabulary.
    pub bucket: Option<HoursBucket>,
}

impl HoursFlags {
    /// Exact match against the five range tokens. No match leaves every
    /// flag clear rather than failing.
    pub fn from_token(token: &str) -> Self {
        Self {
            bucket: HoursBucket::from_token(token),
        }
    }

    /// Whether the flag for `bucket` is set.
    pub fn is(&self, bucket: HoursBucket) -> bool {
        self.bucket == Some(bucket)
    }
}

/// Replace `hours_on_computer` with its stripped range token.
pub fn parse_hours_on_computer(mut df: DataFrame) -> Result<DataFrame> {
    let tokens: Vec<String> = answers(&df, field::HOURS_ON_COMPUTER)?
        .iter()
        .map(|answer| normalize_hours_on_computer(answer))
        .collect();

    df.with_column(Column::new(field::HOURS_ON_COMPUTER.into(), tokens))?;
    Ok(df)
}

/// Expand the range token into five bucket flags and drop the text column.
///
/// Exactly one flag is set per row when the token is known; none otherwise.
pub fn parse_hours_on_computer_to_buckets(mut df: DataFrame) -> Result<DataFrame> {
    let flags: Vec<HoursFlags> = answers(&df, field::HOURS_ON_COMPUTER)?
        .iter()
        .map(|token| HoursFlags::from_token(token))
        .collect();

    let unmatched = flags.iter().filter(|f| f.bucket.is_none()).count();
    debug!(rows = flags.len(), unmatched, "bucketed hours on computer");

    for bucket in HoursBucket::ALL {
        df.with_column(flag_column(
            bucket.column(),
            flags.iter().map(|f| f.is(bucket)),
        ))?;
    }
    df.drop_in_place(field::HOURS_ON_COMPUTER)?;
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_bucket_token_survives_normalization() {
        for bucket in HoursBucket::ALL {
            let answer = format!("{}h", bucket.token());
            assert_eq!(normalize_hours_on_computer(&answer), bucket.token());
        }
    }

    #[test]
    fn unknown_phrasing_sets_no_flag() {
        let token = normalize_hours_on_computer("Entre 1 e 3 horas");
        let flags = HoursFlags::from_token(&token);
        assert_eq!(flags.bucket, None);
        assert!(HoursBucket::ALL.iter().all(|b| !flags.is(*b)));
    }
}
