//! Header cell normalization.

/// Normalizes a header cell: strips a UTF-8 byte order mark, trims, and
/// collapses inner whitespace runs to a single space.
///
/// # Examples
///
/// ```
/// use survey_ingest::normalize_header;
///
/// assert_eq!(normalize_header("\u{feff}Carimbo de data/hora"), "Carimbo de data/hora");
/// assert_eq!(normalize_header("  Qual a sua   faixa etária? "), "Qual a sua faixa etária?");
/// ```
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::with_capacity(trimmed.len());
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}
