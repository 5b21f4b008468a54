//! Keyed comparison of a generated table against a pasted reference block.
//!
//! The reference block is tab-separated with a header naming the three
//! output columns in any order:
//! ```text
//! AW ID\tArtwork Name\tShort URL
//! 35221837\tAbsolutely No Problem Phone Cases\tabsolutely-no-problem-phone-cases
//! ```
//! Cells are separated by single tabs, so an empty cell keeps its column.
//! Rows are joined on `AW ID`. Labels and slugs are compared exactly.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::error::ArtworkError;
use crate::table::{ID_HEADER, NAME_HEADER, URL_HEADER, Table, TableRow};

/// Outcome of joining one identifier across both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    MatchedEqual,
    MatchedDiffering,
    OnlyInGenerated,
    OnlyInComparison,
}

impl MatchStatus {
    pub fn is_differing(self) -> bool {
        !matches!(self, MatchStatus::MatchedEqual)
    }

    /// One-character marker used in reports.
    pub fn marker(self) -> char {
        match self {
            MatchStatus::MatchedEqual => '=',
            MatchStatus::MatchedDiffering => '~',
            MatchStatus::OnlyInGenerated => '+',
            MatchStatus::OnlyInComparison => '-',
        }
    }
}

/// A generated row and what it was matched against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedRow<'a> {
    pub generated: &'a TableRow,
    pub compared: Option<TableRow>,
    pub status: MatchStatus,
}

impl TaggedRow<'_> {
    pub fn label_differs(&self) -> bool {
        self.compared
            .as_ref()
            .is_some_and(|c| c.label != self.generated.label)
    }

    pub fn slug_differs(&self) -> bool {
        self.compared
            .as_ref()
            .is_some_and(|c| c.slug != self.generated.slug)
    }
}

/// Result of comparing a generated table with a reference block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison<'a> {
    /// Every generated row, in generated order.
    pub rows: Vec<TaggedRow<'a>>,
    /// Reference rows whose identifier was not generated, in reference order.
    pub only_in_comparison: Vec<TableRow>,
    /// Positions in `rows` that are not [`MatchStatus::MatchedEqual`].
    pub differing: BTreeSet<usize>,
}

impl<'a> Comparison<'a> {
    /// The generated table with no row flagged; used when the comparison
    /// could not run.
    pub fn unflagged(table: &'a Table) -> Self {
        Self {
            rows: table
                .rows()
                .iter()
                .map(|row| TaggedRow {
                    generated: row,
                    compared: None,
                    status: MatchStatus::MatchedEqual,
                })
                .collect(),
            only_in_comparison: Vec::new(),
            differing: BTreeSet::new(),
        }
    }

    /// Whether both sides agree completely.
    pub fn is_clean(&self) -> bool {
        self.differing.is_empty() && self.only_in_comparison.is_empty()
    }

    pub fn count(&self, status: MatchStatus) -> usize {
        match status {
            MatchStatus::OnlyInComparison => self.only_in_comparison.len(),
            _ => self.rows.iter().filter(|r| r.status == status).count(),
        }
    }
}

/// Split one reference line on single tabs, trimming each field.
///
/// Empty cells keep their position, so `1\t\ta` is three fields.
fn reference_fields(line: &str) -> Vec<&str> {
    line.split('\t').map(str::trim).collect()
}

/// Parse a reference block into rows, taken at face value.
///
/// The first non-blank line must name all three output columns; data
/// fields are read positionally against it. Missing trailing fields are
/// empty.
pub fn parse_comparison(text: &str) -> Result<Vec<TableRow>, ArtworkError> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());
    let header = lines.next().map(reference_fields).unwrap_or_default();

    let position = |name: &str| header.iter().position(|h| *h == name);
    let (id_pos, name_pos, url_pos) = match (
        position(ID_HEADER),
        position(NAME_HEADER),
        position(URL_HEADER),
    ) {
        (Some(i), Some(n), Some(u)) => (i, n, u),
        (i, n, u) => {
            let missing = [(i, ID_HEADER), (n, NAME_HEADER), (u, URL_HEADER)]
                .into_iter()
                .filter(|(pos, _)| pos.is_none())
                .map(|(_, name)| name.to_string())
                .collect();
            return Err(ArtworkError::MalformedComparisonHeader { missing });
        }
    };

    Ok(lines
        .map(|line| {
            let columns = reference_fields(line);
            let field = |pos: usize| columns.get(pos).copied().unwrap_or("");
            TableRow::new(field(id_pos), field(name_pos), field(url_pos))
        })
        .collect())
}

/// Outer-join `table` with `reference` on identifier.
///
/// When the reference repeats an identifier, its first row wins.
pub fn compare<'a>(table: &'a Table, reference: &[TableRow]) -> Comparison<'a> {
    let mut by_id: HashMap<&str, &TableRow> = HashMap::with_capacity(reference.len());
    for row in reference {
        by_id.entry(row.id.as_str()).or_insert(row);
    }

    let mut differing = BTreeSet::new();
    let rows: Vec<TaggedRow<'a>> = table
        .rows()
        .iter()
        .enumerate()
        .map(|(pos, generated)| {
            let compared = by_id.get(generated.id.as_str()).map(|&r| r.clone());
            let status = match &compared {
                None => MatchStatus::OnlyInGenerated,
                Some(c) if c.label == generated.label && c.slug == generated.slug => {
                    MatchStatus::MatchedEqual
                }
                Some(_) => MatchStatus::MatchedDiffering,
            };
            if status.is_differing() {
                differing.insert(pos);
            }
            TaggedRow {
                generated,
                compared,
                status,
            }
        })
        .collect();

    let generated_ids: HashSet<&str> = table.ids().collect();
    let mut reported = HashSet::new();
    let only_in_comparison = reference
        .iter()
        .filter(|r| !generated_ids.contains(r.id.as_str()) && reported.insert(r.id.as_str()))
        .cloned()
        .collect();

    Comparison {
        rows,
        only_in_comparison,
        differing,
    }
}

/// Parse `text` and compare it with `table`.
pub fn compare_text<'a>(table: &'a Table, text: &str) -> Result<Comparison<'a>, ArtworkError> {
    let reference = parse_comparison(text)?;
    log::debug!(
        "Comparing {} generated row(s) with {} reference row(s)",
        table.len(),
        reference.len()
    );
    Ok(compare(table, &reference))
}

#[cfg(test)]
#[path = "tests/diff_tests.rs"]
mod tests;
