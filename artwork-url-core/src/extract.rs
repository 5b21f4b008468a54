//! Identifier extraction and global first-seen deduplication.
//!
//! Identifier columns hold AW IDs mixed with sentinel markers:
//! ```text
//! 35221837,35226788,Disabled
//! ```
//! Only all-digit tokens survive. An ID is emitted once for the whole input;
//! its label is the one attached to its first occurrence.

use std::collections::HashMap;

use crate::pipeline::PipelineConfig;
use crate::tokenizer::{Delimiter, Row};

/// An accepted identifier and the label it was first seen with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierRecord {
    /// Digits only.
    pub id: String,
    /// Display name; empty in label-less mode.
    pub label: String,
}

/// Whether `token` matches `^[0-9]+$`.
pub fn is_identifier(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Drop every character outside printable ASCII, then trim.
///
/// ```
/// use artwork_url_core::extract::clean_label;
///
/// assert_eq!(clean_label("Another Artwork Name テスト"), "Another Artwork Name");
/// assert_eq!(clean_label("特殊字符"), "");
/// ```
pub fn clean_label(raw: &str) -> String {
    raw.chars()
        .filter(|c| matches!(c, ' '..='~'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Numeric tokens of one identifier column, in order, duplicates included.
pub fn identifier_tokens(column: &str, delimiter: Delimiter) -> impl Iterator<Item = &str> {
    delimiter
        .split(column)
        .into_iter()
        .filter(|token| is_identifier(token))
}

/// Accumulates identifiers in first-seen order across an entire input.
#[derive(Debug, Default)]
pub struct Extractor {
    records: Vec<IdentifierRecord>,
    index: HashMap<String, usize>,
}

impl Extractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `id` under `label`. Returns `false` when the ID was already seen.
    pub fn add(&mut self, id: &str, label: &str) -> bool {
        if let Some(&pos) = self.index.get(id) {
            let first = &self.records[pos].label;
            if first != label {
                log::warn!(
                    "AW ID {id} appears under '{label}' but was first seen under '{first}'; keeping '{first}'"
                );
            } else {
                log::debug!("Dropping repeated AW ID {id}");
            }
            return false;
        }
        self.index.insert(id.to_string(), self.records.len());
        self.records.push(IdentifierRecord {
            id: id.to_string(),
            label: label.to_string(),
        });
        true
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn finish(self) -> Vec<IdentifierRecord> {
        self.records
    }
}

/// Deduplicate a bare token stream, discarding anything non-numeric.
///
/// ```
/// use artwork_url_core::extract::extract_identifiers;
///
/// let ids = extract_identifiers(["35221837", "35226788", "Disabled", "35221837"]);
/// assert_eq!(ids, vec!["35221837", "35226788"]);
/// ```
pub fn extract_identifiers<'a, I>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut extractor = Extractor::new();
    for token in tokens.into_iter().map(str::trim) {
        if is_identifier(token) {
            extractor.add(token, "");
        }
    }
    extractor.finish().into_iter().map(|r| r.id).collect()
}

/// Pull identifier records out of tokenized rows according to `config`.
///
/// In label mode a row whose label is missing or empty after cleaning is
/// skipped entirely. A row with no identifier columns contributes nothing
/// but is not an error.
pub fn extract_rows<'a, I>(rows: I, config: &PipelineConfig) -> Vec<IdentifierRecord>
where
    I: IntoIterator<Item = Row<'a>>,
{
    let mut extractor = Extractor::new();

    for row in rows {
        let label = match config.label_column {
            Some(col) => {
                let raw = row.columns.get(col).copied().unwrap_or("");
                let label = if config.clean_labels {
                    clean_label(raw)
                } else {
                    raw.trim().to_string()
                };
                if label.is_empty() {
                    log::debug!("Line {}: empty artwork name, skipping row", row.line_number);
                    continue;
                }
                label
            }
            None => String::new(),
        };

        let id_columns = config.id_columns.slice(&row.columns);
        if id_columns.is_empty() {
            log::debug!("Line {}: no identifier columns", row.line_number);
        }

        for column in id_columns {
            for id in identifier_tokens(column, config.id_token_delimiter) {
                extractor.add(id, &label);
            }
        }
    }

    log::debug!("Extracted {} unique AW ID(s)", extractor.len());
    extractor.finish()
}

#[cfg(test)]
#[path = "tests/extract_tests.rs"]
mod tests;
