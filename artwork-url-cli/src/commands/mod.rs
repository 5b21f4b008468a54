pub(crate) mod compare;
pub(crate) mod config;
pub(crate) mod generate;
pub(crate) mod presets;

use std::io::Read;
use std::path::Path;

use artwork_url_core::{PipelineConfig, Truncation, load_settings};

use crate::CliError;
use crate::cli_types::PipelineArgs;

/// Read catalog text from a file, or from stdin for `None` / `-`.
pub(crate) fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(p) if p != Path::new("-") => {
            log::debug!("Reading input from {}", p.display());
            Ok(std::fs::read_to_string(p)?)
        }
        _ => {
            log::debug!("Reading input from stdin");
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Resolve the preset from settings, then apply command-line overrides.
pub(crate) fn resolve_pipeline(
    config_path: Option<&Path>,
    args: &PipelineArgs,
) -> Result<PipelineConfig, CliError> {
    let settings = load_settings(config_path)?;
    let mut config = settings.resolve(args.preset.as_deref())?;

    if args.header {
        config.header_present = true;
    } else if args.no_header {
        config.header_present = false;
    }
    if args.keep_non_ascii {
        config.clean_labels = false;
    }
    if args.truncate {
        config.truncation = Truncation::TruncateToShortest;
    }

    log::debug!("Pipeline: {config:?}");
    Ok(config)
}
