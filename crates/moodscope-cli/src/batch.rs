//! Batch analysis command.

use std::path::Path;

use anyhow::Context;
use moodscope_sentiment::{run_batch, write_report, Analyzer, BatchAggregate, BatchOptions};

use crate::lexicon::load_lexicon;

/// Analyze every message in a CSV file and print label and emotion frequencies.
///
/// When `export` is set, the per-message report is written there.
///
/// # Errors
///
/// Returns an error if the input cannot be opened, has no `message` column,
/// or the report cannot be written. Individual row failures are logged and
/// counted, not propagated.
pub(crate) fn run_batch_command(
    lexicon_path: &Path,
    input: &Path,
    top_emotions: usize,
    export: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let lexicon = load_lexicon(lexicon_path)?;
    let analyzer = Analyzer::with_defaults(&lexicon)?;

    let file = std::fs::File::open(input)
        .with_context(|| format!("failed to open batch input {}", input.display()))?;
    let aggregate = run_batch(&analyzer, file, &BatchOptions { top_emotions })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&aggregate)?);
    } else {
        print!("{}", render_summary(&aggregate));
    }

    if let Some(path) = export {
        write_report(path, &aggregate.report)?;
        println!("report exported to {}", path.display());
    }

    Ok(())
}

pub(crate) fn render_summary(aggregate: &BatchAggregate) -> String {
    let mut out = format!(
        "batch complete: {} processed, {} skipped, {} failed\n\n",
        aggregate.processed, aggregate.skipped, aggregate.failed
    );

    out.push_str(&format!("{:<20}COUNT\n", "SENTIMENT"));
    for (label, count) in aggregate.label_counts.iter() {
        out.push_str(&format!("{:<20}{count}\n", label.as_str()));
    }
    out.push('\n');

    if aggregate.emotion_counts.is_empty() {
        out.push_str("no emotions detected\n");
    } else {
        out.push_str(&format!("{:<20}COUNT\n", "EMOTION"));
        for (emotion, count) in aggregate.emotion_counts.ranked() {
            out.push_str(&format!("{emotion:<20}{count}\n"));
        }
    }

    out
}
