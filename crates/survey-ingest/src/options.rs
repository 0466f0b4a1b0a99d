//! Configuration for loading survey exports.

use serde::{Deserialize, Serialize};

/// Options controlling how a survey export is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestOptions {
    /// Field separator byte. Spreadsheet exports in pt-BR locales often use `;`.
    pub separator: u8,
    /// Trim and collapse whitespace in header cells so question text matches
    /// the known headers even when the export padded it.
    pub normalize_headers: bool,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            separator: b',',
            normalize_headers: true,
        }
    }
}

impl IngestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }

    #[must_use]
    pub fn with_normalize_headers(mut self, enable: bool) -> Self {
        self.normalize_headers = enable;
        self
    }
}
