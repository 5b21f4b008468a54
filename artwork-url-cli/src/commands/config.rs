use std::path::{Path, PathBuf};

use artwork_url_core::config::{init_settings, load_settings, settings_path};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use crate::CliError;

fn effective_path(config_path: Option<&Path>) -> PathBuf {
    config_path.map_or_else(settings_path, Path::to_path_buf)
}

/// Show the resolved settings and the file they came from.
pub(crate) fn run_config_show(config_path: Option<&Path>) -> Result<(), CliError> {
    let path = effective_path(config_path);
    let settings = load_settings(Some(path.as_path()))?;

    log::info!(
        "{}",
        "artwork-url Configuration".if_supports_color(Stderr, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stderr, |t| t.cyan()),
            "(exists)".if_supports_color(Stderr, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stderr, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stderr, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    for line in settings.to_toml()?.lines() {
        log::info!("  {line}");
    }

    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path(config_path: Option<&Path>) {
    println!("{}", effective_path(config_path).display());
}

/// Write a commented default settings file.
pub(crate) fn run_config_init(config_path: Option<&Path>) -> Result<(), CliError> {
    let path = init_settings(config_path)?;
    log::info!(
        "{} Wrote {}",
        "\u{2714}".if_supports_color(Stderr, |t| t.green()),
        path.display(),
    );
    Ok(())
}
