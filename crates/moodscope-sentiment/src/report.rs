//! Plain-text export of analyzed messages.

use std::path::Path;

use crate::error::SentimentError;
use crate::types::MessageAnalysis;

/// Fixed-width line separating report blocks.
pub const DIVIDER: &str = "------------------------------------------------------------";

/// Render one analysis as a report block, divider included.
///
/// ```text
/// Message: I am so happy and grateful today
/// Sentiment: Positive (compound: 0.8051, pos: 0.592, neu: 0.408, neg: 0.000)
/// Top Emotions: anticipation (0.2857), positive (0.2857), joy (0.1429)
/// ------------------------------------------------------------
/// ```
#[must_use]
pub fn format_block(analysis: &MessageAnalysis, top_n: usize) -> String {
    let s = &analysis.sentiment;
    let top = analysis.top_emotions(top_n);
    let emotions = if top.is_empty() {
        "none".to_string()
    } else {
        top.iter()
            .map(|e| format!("{} ({:.4})", e.emotion, e.score))
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "Message: {}\n\
         Sentiment: {} (compound: {:.4}, pos: {:.3}, neu: {:.3}, neg: {:.3})\n\
         Top Emotions: {emotions}\n\
         {DIVIDER}\n",
        analysis.message, s.label, s.compound, s.pos, s.neu, s.neg
    )
}

/// Write `report` to `path`, creating or truncating the file.
///
/// # Errors
///
/// Returns [`SentimentError::Io`] if the file cannot be written.
pub fn write_report(path: &Path, report: &str) -> Result<(), SentimentError> {
    std::fs::write(path, report).map_err(|e| SentimentError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::info!(path = %path.display(), bytes = report.len(), "report written");
    Ok(())
}
