use std::path::Path;

use artwork_url_core::{ArtworkError, Comparison, MatchStatus, Session, TaggedRow};
use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};

use crate::CliError;
use crate::cli_types::PipelineArgs;

use super::{read_input, resolve_pipeline};

/// Generate a table and diff it against a reference TSV file.
pub(crate) fn run_compare(
    config_path: Option<&Path>,
    args: &PipelineArgs,
    against: &Path,
    only_differences: bool,
    fail_on_diff: bool,
) -> Result<(), CliError> {
    let config = resolve_pipeline(config_path, args)?;
    let text = read_input(args.input.as_deref())?;
    let reference = std::fs::read_to_string(against)?;

    let mut session = Session::new();
    match session.generate(&text, &config) {
        Ok(table) => log::info!("Generated {} row(s)", table.len()),
        Err(e) if e.is_empty_result() => {
            log::warn!("{e}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    let comparison = match session.compare(&reference) {
        Ok(comparison) => comparison,
        Err(e @ ArtworkError::MalformedComparisonHeader { .. }) => {
            log::error!("{e}");
            log::warn!("Comparison aborted; showing the generated table unflagged.");
            let table = session.last_table().ok_or(ArtworkError::NoGeneratedTable)?;
            Comparison::unflagged(table)
        }
        Err(e) => return Err(e.into()),
    };

    print_comparison(&comparison, only_differences);
    crate::log_blank();
    log_summary(&comparison);

    let differing = difference_count(&comparison);
    if fail_on_diff && differing > 0 {
        return Err(CliError::Differences(differing));
    }
    Ok(())
}

/// Rows that disagree on either side, for `--fail-on-diff`.
fn difference_count(comparison: &Comparison<'_>) -> usize {
    comparison.differing.len() + comparison.only_in_comparison.len()
}

fn print_comparison(comparison: &Comparison<'_>, only_differences: bool) {
    for row in &comparison.rows {
        if only_differences && !row.status.is_differing() {
            continue;
        }
        print_tagged_row(row);
    }

    for row in &comparison.only_in_comparison {
        println!(
            "{} {}\t{}\t{}  {}",
            colored_marker(MatchStatus::OnlyInComparison),
            row.id,
            row.label,
            row.slug,
            "(not generated)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
}

fn print_tagged_row(row: &TaggedRow<'_>) {
    let generated = row.generated;
    let note = match row.status {
        MatchStatus::OnlyInGenerated => format!(
            "  {}",
            "(not in comparison)".if_supports_color(Stdout, |t| t.dimmed())
        ),
        _ => String::new(),
    };
    println!(
        "{} {}\t{}\t{}{}",
        colored_marker(row.status),
        generated.id,
        generated.label,
        generated.slug,
        note,
    );

    let Some(compared) = &row.compared else {
        return;
    };
    if row.label_differs() {
        print_field_change("Artwork Name", &generated.label, &compared.label);
    }
    if row.slug_differs() {
        print_field_change("Short URL", &generated.slug, &compared.slug);
    }
}

fn print_field_change(field: &str, generated: &str, compared: &str) {
    println!(
        "    {}: {} {} {}",
        field.if_supports_color(Stdout, |t| t.cyan()),
        generated.if_supports_color(Stdout, |t| t.green()),
        "->".if_supports_color(Stdout, |t| t.dimmed()),
        compared.if_supports_color(Stdout, |t| t.red()),
    );
}

fn colored_marker(status: MatchStatus) -> String {
    let marker = status.marker();
    match status {
        MatchStatus::MatchedEqual => marker.if_supports_color(Stdout, |t| t.dimmed()).to_string(),
        MatchStatus::MatchedDiffering => {
            marker.if_supports_color(Stdout, |t| t.yellow()).to_string()
        }
        MatchStatus::OnlyInGenerated => marker.if_supports_color(Stdout, |t| t.green()).to_string(),
        MatchStatus::OnlyInComparison => marker.if_supports_color(Stdout, |t| t.red()).to_string(),
    }
}

fn log_summary(comparison: &Comparison<'_>) {
    let equal = comparison.count(MatchStatus::MatchedEqual);
    let changed = comparison.count(MatchStatus::MatchedDiffering);
    let added = comparison.count(MatchStatus::OnlyInGenerated);
    let removed = comparison.count(MatchStatus::OnlyInComparison);

    if comparison.is_clean() {
        log::info!(
            "{} All {} row(s) match",
            "\u{2714}".if_supports_color(Stderr, |t| t.green()),
            equal,
        );
        return;
    }

    log::info!(
        "{}",
        "Comparison summary".if_supports_color(Stderr, |t| t.bold()),
    );
    log::info!("  Matching:              {:>6}", equal);
    log::info!("  Differing:             {:>6}", changed);
    log::info!("  Only in generated:     {:>6}", added);
    log::info!("  Only in comparison:    {:>6}", removed);
}
