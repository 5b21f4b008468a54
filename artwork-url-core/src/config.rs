//! Settings file: default preset, cleaning/truncation defaults, and
//! user-defined sheet layouts.
//!
//! The file lives at `~/.config/artwork-url/settings.toml` unless a path is
//! given explicitly. A missing file means built-in defaults.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ArtworkError;
use crate::pipeline::{ColumnRange, PipelineConfig, Preset};
use crate::table::Truncation;
use crate::tokenizer::Delimiter;

/// Canonical path to the settings file: `~/.config/artwork-url/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("artwork-url").join("settings.toml")
}

/// Parsed settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub presets: BTreeMap<String, PresetDef>,
}

/// `[defaults]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    /// Preset used when none is named.
    #[serde(default = "default_preset_name")]
    pub preset: String,
    /// Truncate uneven sequences instead of failing.
    #[serde(default)]
    pub truncate: bool,
    /// Strip non-ASCII characters from artwork names.
    #[serde(default = "default_true")]
    pub clean_labels: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            preset: default_preset_name(),
            truncate: false,
            clean_labels: true,
        }
    }
}

fn default_preset_name() -> String {
    Preset::NameIds.name().to_string()
}

fn default_true() -> bool {
    true
}

/// A user-defined layout under `[presets.<name>]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetDef {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub header_present: bool,
    #[serde(default)]
    pub label_column: Option<usize>,
    pub id_columns: ColumnRange,
    #[serde(default)]
    pub column_delimiter: Delimiter,
    #[serde(default = "default_id_token_delimiter")]
    pub id_token_delimiter: Delimiter,
}

fn default_id_token_delimiter() -> Delimiter {
    Delimiter::CommaOrWhitespace
}

impl PresetDef {
    fn to_config(&self, defaults: &Defaults) -> PipelineConfig {
        PipelineConfig {
            header_present: self.header_present,
            label_column: self.label_column,
            id_columns: self.id_columns,
            column_delimiter: self.column_delimiter,
            id_token_delimiter: self.id_token_delimiter,
            clean_labels: defaults.clean_labels,
            truncation: truncation_for(defaults),
        }
    }
}

fn truncation_for(defaults: &Defaults) -> Truncation {
    if defaults.truncate {
        Truncation::TruncateToShortest
    } else {
        Truncation::Strict
    }
}

impl Settings {
    /// Parse settings from TOML text and validate user presets.
    pub fn from_toml(contents: &str) -> Result<Self, ArtworkError> {
        let settings: Settings =
            toml::from_str(contents).map_err(|e| ArtworkError::config(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ArtworkError> {
        for (name, def) in &self.presets {
            if Preset::from_name(name).is_some() {
                return Err(ArtworkError::config(format!(
                    "preset '{name}' conflicts with a built-in preset"
                )));
            }
            if def.id_columns.is_empty() {
                return Err(ArtworkError::config(format!(
                    "preset '{name}' has an empty id_columns range ({})",
                    def.id_columns
                )));
            }
        }
        Ok(())
    }

    /// Resolve a preset by name (or the configured default) into a
    /// pipeline configuration with the `[defaults]` applied.
    pub fn resolve(&self, name: Option<&str>) -> Result<PipelineConfig, ArtworkError> {
        let name = name.unwrap_or(self.defaults.preset.as_str());

        if let Some(preset) = Preset::from_name(name) {
            let mut config = preset.config();
            config.clean_labels = self.defaults.clean_labels;
            config.truncation = truncation_for(&self.defaults);
            return Ok(config);
        }

        self.presets
            .get(name)
            .map(|def| def.to_config(&self.defaults))
            .ok_or_else(|| ArtworkError::unknown_preset(name))
    }

    pub fn to_toml(&self) -> Result<String, ArtworkError> {
        toml::to_string_pretty(self).map_err(|e| ArtworkError::config(e.to_string()))
    }
}

/// Load settings from `path`, or from [`settings_path`] when `None`.
///
/// A missing file yields the defaults.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ArtworkError> {
    let path = path.map_or_else(settings_path, Path::to_path_buf);
    match std::fs::read_to_string(&path) {
        Ok(contents) => {
            log::debug!("Loading settings from {}", path.display());
            Settings::from_toml(&contents).map_err(|e| match e {
                ArtworkError::Config(msg) => {
                    ArtworkError::config(format!("{}: {msg}", path.display()))
                }
                other => other,
            })
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Settings::default()),
        Err(e) => Err(e.into()),
    }
}

const SETTINGS_TEMPLATE: &str = r#"# artwork-url settings

[defaults]
# Preset used when --preset is not given.
preset = "name-ids"
# Cut uneven id/name/slug sequences to the shortest instead of failing.
# This silently drops rows; leave it off unless you know why you need it.
truncate = false
# Remove non-ASCII characters from artwork names.
clean_labels = true

# User-defined layouts. Column indices are 0-based; omit `end` to take
# every column from `start` on.
#
# [presets.my-sheet]
# description = "Name, preview, then device columns"
# header_present = true
# label_column = 0
# id_columns = { start = 2 }
# column_delimiter = "tab-run"
# id_token_delimiter = "comma-or-whitespace"
"#;

/// Write a commented default settings file. Refuses to overwrite.
pub fn init_settings(path: Option<&Path>) -> Result<PathBuf, ArtworkError> {
    let path = path.map_or_else(settings_path, Path::to_path_buf);
    if path.exists() {
        return Err(ArtworkError::config(format!(
            "{} already exists",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, SETTINGS_TEMPLATE)?;
    std::fs::rename(&tmp, &path)?;

    Ok(path)
}
