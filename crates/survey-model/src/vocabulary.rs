//! Closed answer vocabularies.
//!
//! Survey answers are matched by exact string comparison against the tables
//! below. Anything outside a table is not an error: it simply matches no
//! entry, and the parsers turn that into an all-zero set of indicator flags.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::schema::field;

/// The affirmative answer to a yes/no question.
pub const AFFIRMATIVE_ANSWER: &str = "Sim";

/// The answer meaning "none of the listed diseases".
pub const NO_DISEASE_ANSWER: &str = "Nenhuma";

/// Unit text appended to age group answers ("18 - 24 anos").
pub const AGE_UNIT: &str = "anos";

/// Unit text appended to daily-hours answers ("3-5h").
pub const HOURS_UNIT: &str = "h";

/// Separator between the options ticked in a multiple choice answer.
pub const CHOICE_SEPARATOR: char = ',';

/// Timestamp layout of the export's submission column (`15/03/2023 14:30:00`).
pub const REFERENCE_DATE_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// A disease the questionnaire asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Disease {
    Tendinitis,
    MuscleAches,
    CarpalTunnelSyndrome,
    Backache,
    Bursitis,
    DryEyeSyndrome,
    Eyestrain,
}

impl Disease {
    /// Every disease, in output column order.
    pub const ALL: [Disease; 7] = [
        Disease::Tendinitis,
        Disease::MuscleAches,
        Disease::CarpalTunnelSyndrome,
        Disease::Backache,
        Disease::Bursitis,
        Disease::DryEyeSyndrome,
        Disease::Eyestrain,
    ];

    /// The option label as it appears inside a comma-split answer.
    ///
    /// Some labels lost their closing parenthesis: the export joins ticked
    /// options with commas, and those options contain commas themselves.
    pub fn label(self) -> &'static str {
        match self {
            Disease::Tendinitis => "Tendinite",
            Disease::MuscleAches => "Mialgia (Dores musculares)",
            Disease::CarpalTunnelSyndrome => {
                "Síndrome do túnel do carpo (Desconfortos na palma da mão - formigamentos"
            }
            Disease::Backache => "Lombalgia (Desconfortos na lombar)",
            Disease::Bursitis => "Bursite (Desconfortos na região do ombro",
            Disease::DryEyeSyndrome => "Síndrome do Olho Seco",
            Disease::Eyestrain => "Vista Cansada",
        }
    }

    /// Indicator column set when the disease is ticked.
    pub fn column(self) -> &'static str {
        match self {
            Disease::Tendinitis => field::HAS_TENDINITIS,
            Disease::MuscleAches => field::HAS_MUSCLE_ACHES,
            Disease::CarpalTunnelSyndrome => field::HAS_CARPAL_TUNNEL_SYNDROME,
            Disease::Backache => field::HAS_BACKACHE,
            Disease::Bursitis => field::HAS_BURSITIS,
            Disease::DryEyeSyndrome => field::HAS_DRY_EYE_SYNDROME,
            Disease::Eyestrain => field::HAS_EYESTRAIN,
        }
    }

    /// Position of the disease in [`Disease::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Exact-match lookup of a single trimmed option label.
    pub fn from_label(label: &str) -> Option<Disease> {
        Self::ALL.into_iter().find(|disease| disease.label() == label)
    }
}

impl fmt::Display for Disease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Daily time spent on the computer, as a closed range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HoursBucket {
    LessThanOne,
    OneToThree,
    ThreeToFive,
    FiveToEight,
    MoreThanEight,
}

impl HoursBucket {
    /// Every bucket, in output column order.
    pub const ALL: [HoursBucket; 5] = [
        HoursBucket::LessThanOne,
        HoursBucket::OneToThree,
        HoursBucket::ThreeToFive,
        HoursBucket::FiveToEight,
        HoursBucket::MoreThanEight,
    ];

    /// Range token left once the unit and whitespace are stripped.
    pub fn token(self) -> &'static str {
        match self {
            HoursBucket::LessThanOne => "<1",
            HoursBucket::OneToThree => "1-3",
            HoursBucket::ThreeToFive => "3-5",
            HoursBucket::FiveToEight => "5-8",
            HoursBucket::MoreThanEight => ">8",
        }
    }

    /// Indicator column set for this bucket.
    pub fn column(self) -> &'static str {
        match self {
            HoursBucket::LessThanOne => field::LESS_THEN_1HOUR,
            HoursBucket::OneToThree => field::BETWEEN_1_AND_3_HOURS,
            HoursBucket::ThreeToFive => field::BETWEEN_3_AND_5_HOURS,
            HoursBucket::FiveToEight => field::BETWEEN_5_AND_8_HOURS,
            HoursBucket::MoreThanEight => field::MORE_THEN_8_HOURS,
        }
    }

    /// Position of the bucket in [`HoursBucket::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Exact-match lookup of a normalized range token.
    pub fn from_token(token: &str) -> Option<HoursBucket> {
        Self::ALL.into_iter().find(|bucket| bucket.token() == token)
    }
}

impl fmt::Display for HoursBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
