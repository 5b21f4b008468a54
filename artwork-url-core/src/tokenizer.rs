//! Row and column splitting for pasted catalog text.
//!
//! Catalog sheets are usually copied out of a spreadsheet, so columns are
//! separated by one or more tabs:
//! ```text
//! Absolutely No Problem Phone Cases\t35221837,35226788,Disabled
//! Another Artwork Name\t35207351,Disabled
//! ```
//! Blank lines never produce a row. Every other line is trimmed and split
//! according to a [`Delimiter`] policy.

use serde::{Deserialize, Serialize};

/// How a line (or a single column) is split into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Delimiter {
    /// One or more consecutive tabs separate fields.
    #[default]
    TabRun,
    /// Any run of commas and/or whitespace separates fields.
    CommaOrWhitespace,
    /// No splitting: the whole (trimmed) text is a single field.
    Newline,
}

impl Delimiter {
    /// All policies, in display order.
    pub const ALL: [Delimiter; 3] = [
        Delimiter::TabRun,
        Delimiter::CommaOrWhitespace,
        Delimiter::Newline,
    ];

    /// Name used in settings files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Delimiter::TabRun => "tab-run",
            Delimiter::CommaOrWhitespace => "comma-or-whitespace",
            Delimiter::Newline => "newline",
        }
    }

    /// Split `text` into fields.
    ///
    /// `TabRun` keeps field positions: a field holding only spaces between
    /// two tabs survives as an empty string. The other policies never yield
    /// empty fields.
    pub fn split(self, text: &str) -> Vec<&str> {
        match self {
            Delimiter::TabRun => text
                .split('\t')
                .filter(|s| !s.is_empty())
                .map(str::trim)
                .collect(),
            Delimiter::CommaOrWhitespace => text
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|s| !s.is_empty())
                .collect(),
            Delimiter::Newline => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    Vec::new()
                } else {
                    vec![trimmed]
                }
            }
        }
    }
}

impl std::fmt::Display for Delimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Delimiter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Delimiter::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown delimiter '{s}'"))
    }
}

/// One non-blank input line and its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    /// 1-based line number in the input text.
    pub line_number: usize,
    /// The trimmed line.
    pub raw: &'a str,
    /// Fields split per the active [`Delimiter`].
    pub columns: Vec<&'a str>,
}

/// Lazy iterator over the non-blank rows of a text block.
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    delimiter: Delimiter,
}

impl<'a> Iterator for Rows<'a> {
    type Item = Row<'a>;

    fn next(&mut self) -> Option<Row<'a>> {
        for (i, line) in self.lines.by_ref() {
            let raw = line.trim();
            if raw.is_empty() {
                continue;
            }
            return Some(Row {
                line_number: i + 1,
                raw,
                columns: self.delimiter.split(raw),
            });
        }
        None
    }
}

/// Split `text` into rows, optionally consuming the first non-blank line as
/// a header.
///
/// Returns the header row (if requested and present) and the remaining data
/// rows.
pub fn tokenize(
    text: &str,
    delimiter: Delimiter,
    header_present: bool,
) -> (Option<Row<'_>>, Rows<'_>) {
    let mut rows = Rows {
        lines: text.lines().enumerate(),
        delimiter,
    };
    let header = if header_present { rows.next() } else { None };
    (header, rows)
}

/// Whether `text` contains at least one non-blank line.
pub fn has_content(text: &str) -> bool {
    text.lines().any(|line| !line.trim().is_empty())
}

#[cfg(test)]
#[path = "tests/tokenizer_tests.rs"]
mod tests;
