//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "artwork-url")]
#[command(about = "Build AW ID / short URL tables from artwork catalog sheets", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    /// Settings file (defaults to ~/.config/artwork-url/settings.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments shared by every command that runs the pipeline.
#[derive(Args, Clone)]
pub(crate) struct PipelineArgs {
    /// Catalog text file; omit or pass "-" to read stdin
    pub input: Option<PathBuf>,

    /// Sheet layout (see `artwork-url presets`)
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Treat the first non-blank line as a header
    #[arg(long, conflicts_with = "no_header")]
    pub header: bool,

    /// Treat every line as data, even if the preset expects a header
    #[arg(long)]
    pub no_header: bool,

    /// Keep non-ASCII characters in artwork names
    #[arg(long)]
    pub keep_non_ascii: bool,

    /// Cut uneven id/name/slug sequences to the shortest instead of failing (drops rows)
    #[arg(long)]
    pub truncate: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Aligned plain-text table
    Table,
    /// Tab-separated values with a header row
    Tsv,
    /// AW IDs, one per line
    Ids,
    /// AW IDs separated by ", "
    IdsInline,
    /// Table followed by both ID lists
    All,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Generate the AW ID / short URL table
    Generate {
        #[command(flatten)]
        pipeline: PipelineArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Write output to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate a table and compare it with a previously published TSV table
    Compare {
        #[command(flatten)]
        pipeline: PipelineArgs,

        /// TSV file with "AW ID", "Artwork Name" and "Short URL" columns
        #[arg(short, long)]
        against: PathBuf,

        /// Only print rows that differ
        #[arg(long)]
        only_differences: bool,

        /// Exit with an error when any row differs
        #[arg(long)]
        fail_on_diff: bool,
    },

    /// List built-in and user-defined sheet layouts
    Presets,

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the resolved settings and where they came from
    Show,

    /// Print the settings file path
    Path,

    /// Write a commented default settings file
    Init,
}
