use thiserror::Error;

/// Errors reported by the artwork URL pipeline.
///
/// Every variant is recoverable: callers render the message and keep going.
#[derive(Debug, Error)]
pub enum ArtworkError {
    /// No non-blank lines were supplied.
    #[error("Nothing to process: enter at least one line with an artwork name and AW IDs")]
    EmptyInput,

    /// Input was parsed but nothing matched the numeric identifier pattern.
    #[error("No valid numeric AW IDs or valid English artwork names found in the input")]
    NoValidIdentifiers,

    /// Parallel id/label/slug sequences differ in length and truncation is off.
    #[error("Shape mismatch: {ids} ids, {labels} labels, {slugs} slugs")]
    ShapeMismatch {
        ids: usize,
        labels: usize,
        slugs: usize,
    },

    /// The comparison block's header is missing required column names.
    #[error("Comparison header is missing column(s): {}", missing.join(", "))]
    MalformedComparisonHeader { missing: Vec<String> },

    /// A comparison was requested before any table was generated.
    #[error("No generated table to compare against")]
    NoGeneratedTable,

    /// Preset name not found among built-in or user presets.
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    /// Settings file could not be parsed or contains an invalid preset.
    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ArtworkError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn unknown_preset(name: impl Into<String>) -> Self {
        Self::UnknownPreset(name.into())
    }

    /// Whether this error only means "no rows came out" rather than a fault.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::EmptyInput | Self::NoValidIdentifiers)
    }
}
