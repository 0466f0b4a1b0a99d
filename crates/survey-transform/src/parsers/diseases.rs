//! Disease flags parser.

use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use tracing::debug;

use survey_model::{CHOICE_SEPARATOR, Disease, NO_DISEASE_ANSWER, schema::field};

use crate::error::Result;
use crate::frame::{answers, flag_column};

/// Indicator flags derived from one `diseases` answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseFlags {
    /// Set whenever the answer is anything but the "none" token.
    pub has_any: bool,
    /// One flag per [`Disease::ALL`] entry.
    pub present: [bool; 7],
}

impl DiseaseFlags {
    /// Classify a comma-separated multiple choice answer.
    ///
    /// Options are trimmed and matched exactly against the disease labels;
    /// unknown options set nothing. `has_any` only compares the whole answer
    /// against the "none" token, so free text outside the vocabulary yields
    /// `has_any` with every specific flag clear.
    pub fn from_answer(answer: &str) -> Self {
        let mut present = [false; 7];
        for option in answer.split(CHOICE_SEPARATOR) {
            if let Some(disease) = Disease::from_label(option.trim()) {
                present[disease.index()] = true;
            }
        }
        Self {
            has_any: answer != NO_DISEASE_ANSWER,
            present,
        }
    }

    /// Whether a specific disease was ticked.
    pub fn has(&self, disease: Disease) -> bool {
        self.present[disease.index()]
    }

    /// True when the answer claims a disease but none is in the vocabulary.
    pub fn is_unrecognized(&self) -> bool {
        self.has_any && !self.present.iter().any(|flag| *flag)
    }
}

/// Expand `diseases` into `has_any_disease` plus one flag per disease, then
/// drop the raw text column.
///
/// A null cell reads as the empty answer, which is not `"Nenhuma"`, so a
/// skipped question sets `has_any_disease = 1` with no specific flag.
pub fn parse_diseases(mut df: DataFrame) -> Result<DataFrame> {
    let flags: Vec<DiseaseFlags> = answers(&df, field::DISEASES)?
        .iter()
        .map(|answer| DiseaseFlags::from_answer(answer))
        .collect();

    let unrecognized = flags.iter().filter(|f| f.is_unrecognized()).count();
    debug!(rows = flags.len(), unrecognized, "parsed disease answers");

    df.with_column(flag_column(
        field::HAS_ANY_DISEASE,
        flags.iter().map(|f| f.has_any),
    ))?;
    for disease in Disease::ALL {
        df.with_column(flag_column(
            disease.column(),
            flags.iter().map(|f| f.has(disease)),
        ))?;
    }
    df.drop_in_place(field::DISEASES)?;
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims_options() {
        let flags = DiseaseFlags::from_answer("Tendinite, Vista Cansada");
        assert!(flags.has_any);
        assert!(flags.has(Disease::Tendinitis));
        assert!(flags.has(Disease::Eyestrain));
        assert!(!flags.has(Disease::Backache));
    }

    #[test]
    fn none_token_clears_everything() {
        assert_eq!(DiseaseFlags::from_answer("Nenhuma"), DiseaseFlags::default());
    }

    #[test]
    fn unknown_text_only_sets_aggregate() {
        let flags = DiseaseFlags::from_answer("Enxaqueca");
        assert!(flags.is_unrecognized());
        assert_eq!(flags.present, [false; 7]);
    }

    #[test]
    fn label_split_by_inner_comma_still_matches() {
        let answer = "Síndrome do túnel do carpo (Desconfortos na palma da mão - formigamentos, dormência)";
        let flags = DiseaseFlags::from_answer(answer);
        assert!(flags.has(Disease::CarpalTunnelSyndrome));
    }
}
