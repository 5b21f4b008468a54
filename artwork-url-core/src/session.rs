//! Retains the most recently generated table for later comparison.

use crate::diff::{Comparison, compare_text};
use crate::error::ArtworkError;
use crate::pipeline::{PipelineConfig, run};
use crate::table::Table;

/// One user session: generate, then compare against the latest result.
///
/// Each [`generate`](Session::generate) call runs the pipeline with fresh
/// slug counters and replaces the retained table on success. A failed
/// generation leaves the previous table in place. The retained table is
/// only ever handed out by shared reference.
#[derive(Debug, Default)]
pub struct Session {
    last: Option<Table>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate(&mut self, text: &str, config: &PipelineConfig) -> Result<&Table, ArtworkError> {
        let table = run(text, config)?;
        log::debug!("Session now holds {} row(s)", table.len());
        Ok(self.last.insert(table))
    }

    pub fn last_table(&self) -> Option<&Table> {
        self.last.as_ref()
    }

    /// Compare the most recent table with a pasted reference block.
    pub fn compare(&self, text: &str) -> Result<Comparison<'_>, ArtworkError> {
        let table = self.last.as_ref().ok_or(ArtworkError::NoGeneratedTable)?;
        compare_text(table, text)
    }
}
