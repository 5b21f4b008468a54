use std::path::Path;

use artwork_url_core::{PipelineConfig, Preset, load_settings};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use crate::CliError;

fn describe(config: &PipelineConfig) -> String {
    let label = config
        .label_column
        .map_or_else(|| "none".to_string(), |c| c.to_string());
    format!(
        "header: {}, name column: {}, AW ID columns: {}, columns split by {}, IDs split by {}",
        if config.header_present { "yes" } else { "no" },
        label,
        config.id_columns,
        config.column_delimiter,
        config.id_token_delimiter,
    )
}

/// List built-in presets followed by any defined in the settings file.
pub(crate) fn run_presets(config_path: Option<&Path>) -> Result<(), CliError> {
    let settings = load_settings(config_path)?;
    let default = settings.defaults.preset.as_str();

    let default_tag = |name: &str| {
        if name == default {
            format!(" {}", "(default)".if_supports_color(Stderr, |t| t.green()))
        } else {
            String::new()
        }
    };

    log::info!("{}:", "Built-in presets".if_supports_color(Stderr, |t| t.bold()));
    for preset in Preset::ALL {
        log::info!(
            "  {}{}",
            preset.name().if_supports_color(Stderr, |t| t.cyan()),
            default_tag(preset.name()),
        );
        log::info!("    {}", preset.description());
        log::info!("    {}", describe(&preset.config()));
    }

    if settings.presets.is_empty() {
        return Ok(());
    }

    crate::log_blank();
    log::info!("{}:", "User presets".if_supports_color(Stderr, |t| t.bold()));
    for (name, def) in &settings.presets {
        let config = settings.resolve(Some(name.as_str()))?;
        log::info!(
            "  {}{}",
            name.if_supports_color(Stderr, |t| t.cyan()),
            default_tag(name),
        );
        if let Some(description) = &def.description {
            log::info!("    {}", description);
        }
        log::info!("    {}", describe(&config));
    }

    Ok(())
}
