//! The configurable text-to-table pipeline.
//!
//! ```text
//! raw text -> tokenize -> extract (id, label) -> slugs -> assemble -> Table
//! ```
//!
//! Sheet layouts differ only in where the label and identifier columns sit
//! and how tokens are separated, so each layout is a [`PipelineConfig`].
//! The layouts in regular use are available as named [`Preset`]s.

use serde::{Deserialize, Serialize};

use crate::error::ArtworkError;
use crate::extract::extract_rows;
use crate::slug::{SlugState, generate_slugs};
use crate::table::{Table, Truncation, assemble};
use crate::tokenizer::{Delimiter, has_content, tokenize};

/// A half-open range of column indices; `end: None` runs to the last column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRange {
    pub start: usize,
    #[serde(default)]
    pub end: Option<usize>,
}

impl ColumnRange {
    pub const fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    pub const fn starting_at(start: usize) -> Self {
        Self { start, end: None }
    }

    /// Whether the range can never select a column.
    pub fn is_empty(&self) -> bool {
        self.end.is_some_and(|end| end <= self.start)
    }

    /// The columns of `columns` this range selects; missing columns are
    /// simply absent from the result.
    pub fn slice<'c, T>(&self, columns: &'c [T]) -> &'c [T] {
        let start = self.start.min(columns.len());
        let end = self
            .end
            .unwrap_or(columns.len())
            .clamp(start, columns.len());
        &columns[start..end]
    }
}

impl std::fmt::Display for ColumnRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.end {
            Some(end) => write!(f, "{}..{}", self.start, end),
            None => write!(f, "{}..", self.start),
        }
    }
}

/// Everything that distinguishes one sheet layout from another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Consume the first non-blank line as a header.
    pub header_present: bool,
    /// Column holding the artwork name; `None` for a bare ID list.
    pub label_column: Option<usize>,
    /// Columns that may hold identifier tokens.
    pub id_columns: ColumnRange,
    /// How a line is split into columns.
    pub column_delimiter: Delimiter,
    /// How an identifier column is split into tokens.
    pub id_token_delimiter: Delimiter,
    /// Strip non-printable-ASCII characters from labels.
    pub clean_labels: bool,
    /// What the assembler does with uneven sequences.
    pub truncation: Truncation,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Preset::NameIds.config()
    }
}

impl PipelineConfig {
    pub fn has_labels(&self) -> bool {
        self.label_column.is_some()
    }
}

/// Built-in sheet layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// `name<TAB>ids`: label in column 0, identifiers in column 1.
    NameIds,
    /// Label in column 0, identifiers in every later column.
    NameAllColumns,
    /// Header row, label in column 0, preview placeholder in column 1,
    /// one identifier column per device model after that.
    DeviceSheet,
    /// Bare identifiers separated by commas and/or whitespace.
    IdsOnly,
    /// One bare identifier per line.
    IdsPerLine,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::NameIds,
        Preset::NameAllColumns,
        Preset::DeviceSheet,
        Preset::IdsOnly,
        Preset::IdsPerLine,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preset::NameIds => "name-ids",
            Preset::NameAllColumns => "name-all-columns",
            Preset::DeviceSheet => "device-sheet",
            Preset::IdsOnly => "ids-only",
            Preset::IdsPerLine => "ids-per-line",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Preset::NameIds => "Artwork name, then one column of AW IDs",
            Preset::NameAllColumns => "Artwork name, then any number of AW ID columns",
            Preset::DeviceSheet => "Header row; name, preview, then one AW ID column per device",
            Preset::IdsOnly => "AW IDs separated by commas or whitespace, no names",
            Preset::IdsPerLine => "One AW ID per line, no names",
        }
    }

    pub fn config(self) -> PipelineConfig {
        let (header_present, label_column, id_columns, column_delimiter, id_token_delimiter) =
            match self {
                Preset::NameIds => (
                    false,
                    Some(0),
                    ColumnRange::new(1, 2),
                    Delimiter::TabRun,
                    Delimiter::CommaOrWhitespace,
                ),
                Preset::NameAllColumns => (
                    false,
                    Some(0),
                    ColumnRange::starting_at(1),
                    Delimiter::TabRun,
                    Delimiter::CommaOrWhitespace,
                ),
                Preset::DeviceSheet => (
                    true,
                    Some(0),
                    ColumnRange::starting_at(2),
                    Delimiter::TabRun,
                    Delimiter::CommaOrWhitespace,
                ),
                Preset::IdsOnly => (
                    false,
                    None,
                    ColumnRange::starting_at(0),
                    Delimiter::CommaOrWhitespace,
                    Delimiter::CommaOrWhitespace,
                ),
                Preset::IdsPerLine => (
                    false,
                    None,
                    ColumnRange::new(0, 1),
                    Delimiter::Newline,
                    Delimiter::Newline,
                ),
            };
        PipelineConfig {
            header_present,
            label_column,
            id_columns,
            column_delimiter,
            id_token_delimiter,
            clean_labels: true,
            truncation: Truncation::Strict,
        }
    }

    pub fn from_name(name: &str) -> Option<Preset> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Preset {
    type Err = ArtworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::from_name(s).ok_or_else(|| ArtworkError::unknown_preset(s))
    }
}

/// Run one full generation over `text`.
///
/// Slug counters start fresh on every call, so two runs over the same text
/// always produce the same table.
pub fn run(text: &str, config: &PipelineConfig) -> Result<Table, ArtworkError> {
    if !has_content(text) {
        return Err(ArtworkError::EmptyInput);
    }

    let (header, rows) = tokenize(text, config.column_delimiter, config.header_present);
    if let Some(header) = &header {
        log::debug!("Header: {}", header.columns.join(" | "));
    }

    let records = extract_rows(rows, config);
    if records.is_empty() {
        return Err(ArtworkError::NoValidIdentifiers);
    }

    let (ids, labels): (Vec<String>, Vec<String>) =
        records.into_iter().map(|r| (r.id, r.label)).unzip();
    let (slugs, state) = generate_slugs(&labels, SlugState::new());
    log::debug!(
        "Generated {} short URL(s) from {} distinct base(s)",
        slugs.len(),
        state.base_count()
    );

    let labels = config.has_labels().then_some(labels);
    assemble(ids, labels, slugs, config.truncation)
}

#[cfg(test)]
#[path = "tests/pipeline_tests.rs"]
mod tests;
