use std::path::Path;

use artwork_url_core::Table;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use crate::CliError;
use crate::cli_types::{OutputFormat, PipelineArgs};

use super::{read_input, resolve_pipeline};

/// Run the pipeline over the input and print or save the result.
pub(crate) fn run_generate(
    config_path: Option<&Path>,
    args: &PipelineArgs,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<(), CliError> {
    let config = resolve_pipeline(config_path, args)?;
    let text = read_input(args.input.as_deref())?;

    let table = match artwork_url_core::run(&text, &config) {
        Ok(table) => table,
        Err(e) if e.is_empty_result() => {
            log::warn!("{e}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    log::info!(
        "{} Generated {} row(s)",
        "\u{2714}".if_supports_color(Stderr, |t| t.green()),
        table.len(),
    );

    let rendered = render(&table, format)?;
    match output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            log::info!(
                "Wrote {}",
                path.display().if_supports_color(Stderr, |t| t.cyan())
            );
        }
        None => println!("{}", rendered.trim_end_matches('\n')),
    }

    Ok(())
}

pub(crate) fn render(table: &Table, format: OutputFormat) -> Result<String, CliError> {
    let text = match format {
        OutputFormat::Table => table.render_text(),
        OutputFormat::Tsv => table.to_tsv()?,
        OutputFormat::Ids => table.id_lines(),
        OutputFormat::IdsInline => table.id_list(),
        OutputFormat::All => format!(
            "{}\n\nAW IDs:\n{}\n\nAW IDs (comma-separated):\n{}",
            table.render_text(),
            table.id_lines(),
            table.id_list(),
        ),
    };
    Ok(text)
}
