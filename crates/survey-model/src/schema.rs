//! Column catalogue for survey tables.
//!
//! A raw export is keyed by the question text shown to respondents. The
//! renamer maps those headers onto the stable identifiers in [`field`], and
//! the parsers then widen the table into [`FINAL_COLUMNS`].

/// Stable field identifiers.
pub mod field {
    pub const REFERENCE_DATE: &str = "reference_date";
    pub const AGE_GROUP: &str = "age_group";
    pub const COLLEGE_TERM: &str = "college_term";
    pub const HOURS_ON_COMPUTER: &str = "hours_on_computer";
    pub const DISEASES: &str = "diseases";
    pub const DIAGNOSED_WITH_LER: &str = "diagnosed_with_ler";
    pub const PRACTICE_EXERCISES: &str = "practice_exercises";
    pub const PRACTICE_STRETCHING: &str = "practice_stretching";
    pub const HAS_ERGONOMIC_CHAIR: &str = "has_ergonomic_chair";
    pub const HAS_WRIST_SUPPORT: &str = "has_wrist_support";

    pub const ALREADY_GRADUATED: &str = "already_graduated";

    pub const HAS_ANY_DISEASE: &str = "has_any_disease";
    pub const HAS_TENDINITIS: &str = "has_tendinitis";
    pub const HAS_MUSCLE_ACHES: &str = "has_muscle_aches";
    pub const HAS_CARPAL_TUNNEL_SYNDROME: &str = "has_carpal_tunnel_syndrome";
    pub const HAS_BACKACHE: &str = "has_backache";
    pub const HAS_BURSITIS: &str = "has_bursitis";
    pub const HAS_DRY_EYE_SYNDROME: &str = "has_dry_eye_syndrome";
    pub const HAS_EYESTRAIN: &str = "has_eyestrain";

    pub const LESS_THEN_1HOUR: &str = "less_then_1hour";
    pub const BETWEEN_1_AND_3_HOURS: &str = "between_1_and_3_hours";
    pub const BETWEEN_3_AND_5_HOURS: &str = "between_3_and_5_hours";
    pub const BETWEEN_5_AND_8_HOURS: &str = "between_5_and_8_hours";
    pub const MORE_THEN_8_HOURS: &str = "more_then_8_hours";
}

/// A survey question header and the stable identifier it is renamed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    /// Question text exactly as it appears in the export header row.
    pub source: &'static str,
    /// Stable identifier used from the renamer onwards.
    pub target: &'static str,
}

/// The ten recognized question headers, in normalized column order.
pub const SOURCE_COLUMNS: [ColumnMapping; 10] = [
    ColumnMapping {
        source: "Carimbo de data/hora",
        target: field::REFERENCE_DATE,
    },
    ColumnMapping {
        source: "Qual a sua faixa etária?",
        target: field::AGE_GROUP,
    },
    ColumnMapping {
        source: "Em qual período você está? (Se estiver desblocado, informar em qual período a maioria das suas disciplinas se encontram)",
        target: field::COLLEGE_TERM,
    },
    ColumnMapping {
        source: "Quanto tempo por dia você passa no computador?",
        target: field::HOURS_ON_COMPUTER,
    },
    ColumnMapping {
        source: "Você possui alguma dessas respectivas doenças? Se sim, quais?",
        target: field::DISEASES,
    },
    ColumnMapping {
        source: "Você já foi diagnosticado com Lesão por Esforço Repetitivo (LER)?",
        target: field::DIAGNOSED_WITH_LER,
    },
    ColumnMapping {
        source: "Pratico atividades físicas regularmente",
        target: field::PRACTICE_EXERCISES,
    },
    ColumnMapping {
        source: "Pratico atividades de alongamento regularmente",
        target: field::PRACTICE_STRETCHING,
    },
    ColumnMapping {
        source: "Utilizo cadeiras ergonômicas em meu ambiente de trabalho",
        target: field::HAS_ERGONOMIC_CHAIR,
    },
    ColumnMapping {
        source: "Utilizo apoio de punho em meu ambiente de trabalho",
        target: field::HAS_WRIST_SUPPORT,
    },
];

/// Column order of a renamed table, before any field is parsed.
pub const NORMALIZED_COLUMNS: [&str; 10] = [
    field::REFERENCE_DATE,
    field::AGE_GROUP,
    field::COLLEGE_TERM,
    field::HOURS_ON_COMPUTER,
    field::DISEASES,
    field::DIAGNOSED_WITH_LER,
    field::PRACTICE_EXERCISES,
    field::PRACTICE_STRETCHING,
    field::HAS_ERGONOMIC_CHAIR,
    field::HAS_WRIST_SUPPORT,
];

/// Column order of a fully normalized table.
///
/// Replaced columns keep their position, derived columns are appended in the
/// order their parser runs, and the raw `diseases` and `hours_on_computer`
/// text columns are gone.
pub const FINAL_COLUMNS: [&str; 22] = [
    field::REFERENCE_DATE,
    field::AGE_GROUP,
    field::COLLEGE_TERM,
    field::DIAGNOSED_WITH_LER,
    field::PRACTICE_EXERCISES,
    field::PRACTICE_STRETCHING,
    field::HAS_ERGONOMIC_CHAIR,
    field::HAS_WRIST_SUPPORT,
    field::HAS_ANY_DISEASE,
    field::HAS_TENDINITIS,
    field::HAS_MUSCLE_ACHES,
    field::HAS_CARPAL_TUNNEL_SYNDROME,
    field::HAS_BACKACHE,
    field::HAS_BURSITIS,
    field::HAS_DRY_EYE_SYNDROME,
    field::HAS_EYESTRAIN,
    field::ALREADY_GRADUATED,
    field::LESS_THEN_1HOUR,
    field::BETWEEN_1_AND_3_HOURS,
    field::BETWEEN_3_AND_5_HOURS,
    field::BETWEEN_5_AND_8_HOURS,
    field::MORE_THEN_8_HOURS,
];

/// Look up the question header that feeds a stable identifier.
pub fn source_header_for(target: &str) -> Option<&'static str> {
    SOURCE_COLUMNS
        .iter()
        .find(|mapping| mapping.target == target)
        .map(|mapping| mapping.source)
}
