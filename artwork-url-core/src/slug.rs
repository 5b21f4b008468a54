//! Short URL slugs derived from artwork names.
//!
//! A slug is the lower-cased name with punctuation turned into spaces and
//! the remaining words joined by hyphens. Repeats of the same slug within
//! one generation get a numbered suffix:
//! ```text
//! Symbol Mosaic Case  -> symbol-mosaic-case
//! Symbol Mosaic Case  -> symbol-mosaic-case-atwgp1
//! Symbol Mosaic Case  -> symbol-mosaic-case-atwgp2
//! ```

use std::collections::HashMap;

/// Literal inserted before the repeat counter.
pub const REPEAT_SUFFIX: &str = "-atwgp";

/// Per-generation occurrence counters, keyed by slug base.
///
/// Owned by the caller of one generation run and threaded through
/// [`generate_slugs`]. Start every run from [`SlugState::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlugState {
    counters: HashMap<String, u32>,
}

impl SlugState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slug for the next occurrence of `label`, advancing its counter.
    ///
    /// Labels that reduce to an empty base yield an empty slug and are not
    /// counted.
    pub fn next_slug(&mut self, label: &str) -> String {
        let base = slug_base(label);
        if base.is_empty() {
            return base;
        }
        match self.counters.get_mut(&base) {
            Some(count) => {
                *count += 1;
                format!("{base}{REPEAT_SUFFIX}{count}")
            }
            None => {
                self.counters.insert(base.clone(), 0);
                base
            }
        }
    }

    /// Repeat count recorded for `base`, or `None` if never produced.
    pub fn repeats(&self, base: &str) -> Option<u32> {
        self.counters.get(base).copied()
    }

    /// Number of distinct bases produced so far.
    pub fn base_count(&self) -> usize {
        self.counters.len()
    }
}

/// Reduce a display name to its unsuffixed slug.
///
/// ```
/// use artwork_url_core::slug::slug_base;
///
/// assert_eq!(slug_base("Absolutely No Problem: Phone Cases!"), "absolutely-no-problem-phone-cases");
/// assert_eq!(slug_base("  Rock_n Roll  "), "rock_n-roll");
/// assert_eq!(slug_base("!!!"), "");
/// ```
pub fn slug_base(label: &str) -> String {
    let spaced: String = label
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    spaced.split_whitespace().collect::<Vec<_>>().join("-")
}

/// Slugs for `labels` in order, continuing from `state`.
///
/// Returns the slugs together with the updated state.
pub fn generate_slugs<S: AsRef<str>>(
    labels: &[S],
    mut state: SlugState,
) -> (Vec<String>, SlugState) {
    let slugs = labels
        .iter()
        .map(|label| state.next_slug(label.as_ref()))
        .collect();
    (slugs, state)
}

#[cfg(test)]
#[path = "tests/slug_tests.rs"]
mod tests;
