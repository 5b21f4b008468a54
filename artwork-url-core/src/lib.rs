//! Artwork catalog to short-URL table generation.
//!
//! Takes pasted, tab-separated catalog rows of artwork names and per-device
//! AW IDs, keeps each numeric ID once in first-seen order, and derives a
//! short URL slug per row. A generated table can then be checked against a
//! previously published one.

pub mod config;
pub mod diff;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod session;
pub mod slug;
pub mod table;
pub mod tokenizer;

pub use config::{Settings, load_settings, settings_path};
pub use diff::{Comparison, MatchStatus, TaggedRow, compare, compare_text, parse_comparison};
pub use error::ArtworkError;
pub use extract::{IdentifierRecord, clean_label, extract_identifiers};
pub use pipeline::{ColumnRange, PipelineConfig, Preset, run};
pub use session::Session;
pub use slug::{SlugState, generate_slugs, slug_base};
pub use table::{Table, TableRow, Truncation, assemble};
pub use tokenizer::Delimiter;
