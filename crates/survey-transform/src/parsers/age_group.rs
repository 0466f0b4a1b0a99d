//! Age group parser.

use polars::prelude::{Column, DataFrame};

use survey_model::{AGE_UNIT, schema::field};

use crate::error::Result;
use crate::frame::text_values;

/// Strip the unit text and all whitespace from an age group answer.
///
/// The result is not checked for being numeric; a range such as `18-24`
/// stays a range.
///
/// # Examples
///
/// ```
/// use survey_transform::parsers::normalize_age_group;
///
/// assert_eq!(normalize_age_group("18 - 24 anos"), "18-24");
/// assert_eq!(normalize_age_group("Mais de 40 anos"), "Maisde40");
/// ```
pub fn normalize_age_group(answer: &str) -> String {
    answer
        .replace(AGE_UNIT, "")
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect()
}

/// Replace `age_group` with its stripped form. Null cells stay null.
pub fn parse_age_group_column(mut df: DataFrame) -> Result<DataFrame> {
    let values: Vec<Option<String>> = text_values(&df, field::AGE_GROUP)?
        .into_iter()
        .map(|answer| answer.map(|text| normalize_age_group(&text)))
        .collect();

    df.with_column(Column::new(field::AGE_GROUP.into(), values))?;
    Ok(df)
}
