//! artwork-url CLI
//!
//! Command-line interface for turning artwork catalog sheets into
//! AW ID / short URL tables.

mod cli_types;
mod commands;
mod error;
mod logging;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;
pub(crate) use logging::log_blank;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let config_path = cli.config.as_deref();
    let result = match cli.command {
        Commands::Generate {
            pipeline,
            format,
            output,
        } => commands::generate::run_generate(config_path, &pipeline, format, output.as_deref()),
        Commands::Compare {
            pipeline,
            against,
            only_differences,
            fail_on_diff,
        } => commands::compare::run_compare(
            config_path,
            &pipeline,
            &against,
            only_differences,
            fail_on_diff,
        ),
        Commands::Presets => commands::presets::run_presets(config_path),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(config_path),
            ConfigAction::Path => {
                commands::config::run_config_path(config_path);
                Ok(())
            }
            ConfigAction::Init => commands::config::run_config_init(config_path),
        },
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}
