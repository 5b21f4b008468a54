//! Row-aligned output table and its text renderings.

use std::io::Write;

use crate::error::ArtworkError;

pub const ID_HEADER: &str = "AW ID";
pub const NAME_HEADER: &str = "Artwork Name";
pub const URL_HEADER: &str = "Short URL";

/// One output row. `label` is empty when the table has no name column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableRow {
    pub id: String,
    pub label: String,
    pub slug: String,
}

impl TableRow {
    pub fn new(id: impl Into<String>, label: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            slug: slug.into(),
        }
    }
}

/// What [`assemble`] does when its input sequences differ in length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Truncation {
    /// Report [`ArtworkError::ShapeMismatch`].
    #[default]
    Strict,
    /// Cut every sequence to the shortest one.
    ///
    /// Loses data silently apart from a warning in the log; only use it
    /// when the tail of the longer sequences is known to be junk.
    TruncateToShortest,
}

/// Generated records in first-seen identifier order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    rows: Vec<TableRow>,
    has_labels: bool,
}

impl Table {
    pub fn new(rows: Vec<TableRow>, has_labels: bool) -> Self {
        Self { rows, has_labels }
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Whether the `Artwork Name` column is part of the output.
    pub fn has_labels(&self) -> bool {
        self.has_labels
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.id.as_str())
    }

    /// Column names in output order.
    pub fn headers(&self) -> Vec<&'static str> {
        if self.has_labels {
            vec![ID_HEADER, NAME_HEADER, URL_HEADER]
        } else {
            vec![ID_HEADER, URL_HEADER]
        }
    }

    fn cells<'r>(&self, row: &'r TableRow) -> Vec<&'r str> {
        if self.has_labels {
            vec![row.id.as_str(), row.label.as_str(), row.slug.as_str()]
        } else {
            vec![row.id.as_str(), row.slug.as_str()]
        }
    }

    /// Identifiers, one per line.
    pub fn id_lines(&self) -> String {
        self.ids().collect::<Vec<_>>().join("\n")
    }

    /// Identifiers joined with `", "`.
    pub fn id_list(&self) -> String {
        self.ids().collect::<Vec<_>>().join(", ")
    }

    /// Plain-text table with right-aligned columns and no index column.
    pub fn render_text(&self) -> String {
        let headers = self.headers();
        let body: Vec<Vec<&str>> = self.rows.iter().map(|r| self.cells(r)).collect();

        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for cells in &body {
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let format_line = |cells: &[&str]| -> String {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{cell:>width$}"))
                .collect::<Vec<_>>()
                .join(" ")
        };

        let mut lines = Vec::with_capacity(body.len() + 1);
        lines.push(format_line(headers.as_slice()));
        lines.extend(body.iter().map(|cells| format_line(cells.as_slice())));
        lines.join("\n")
    }

    /// Write the table as tab-separated values, header row first.
    pub fn write_tsv<W: Write>(&self, writer: W) -> Result<(), ArtworkError> {
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(csv::QuoteStyle::Never)
            .from_writer(writer);
        wtr.write_record(self.headers())?;
        for row in &self.rows {
            wtr.write_record(self.cells(row))?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn to_tsv(&self) -> Result<String, ArtworkError> {
        let mut buf = Vec::new();
        self.write_tsv(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Zip parallel sequences into a [`Table`].
///
/// `labels: None` builds a table without the name column; every row's
/// label is then empty.
pub fn assemble(
    ids: Vec<String>,
    labels: Option<Vec<String>>,
    slugs: Vec<String>,
    truncation: Truncation,
) -> Result<Table, ArtworkError> {
    let has_labels = labels.is_some();
    let label_len = labels.as_ref().map_or(ids.len(), Vec::len);

    if ids.len() != label_len || ids.len() != slugs.len() {
        match truncation {
            Truncation::Strict => {
                return Err(ArtworkError::ShapeMismatch {
                    ids: ids.len(),
                    labels: label_len,
                    slugs: slugs.len(),
                });
            }
            Truncation::TruncateToShortest => {
                let shortest = ids.len().min(label_len).min(slugs.len());
                log::warn!(
                    "Truncating table to {shortest} row(s) (ids: {}, labels: {label_len}, slugs: {})",
                    ids.len(),
                    slugs.len()
                );
            }
        }
    }

    let labels = labels.unwrap_or_else(|| vec![String::new(); ids.len()]);
    let rows = ids
        .into_iter()
        .zip(labels)
        .zip(slugs)
        .map(|((id, label), slug)| TableRow { id, label, slug })
        .collect();

    Ok(Table::new(rows, has_labels))
}

#[cfg(test)]
#[path = "tests/table_tests.rs"]
mod tests;
