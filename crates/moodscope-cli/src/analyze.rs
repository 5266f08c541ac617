//! Single-message analysis command.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use moodscope_sentiment::{Analyzer, MessageAnalysis, SentimentError};

use crate::lexicon::load_lexicon;

const BAR_WIDTH: f64 = 30.0;

/// Analyze one message given inline, from a file, or on stdin.
///
/// Blank input prints a warning and returns without analysis.
///
/// # Errors
///
/// Returns an error if the input or lexicon cannot be read, or the polarity
/// scorer fails.
pub(crate) fn run_analyze(
    lexicon_path: &Path,
    text: Option<String>,
    file: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let message = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read message from {}", path.display()))?,
        (None, None) => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read message from stdin")?;
            buf
        }
    };

    if message.trim().is_empty() {
        println!("Please enter a valid message.");
        return Ok(());
    }

    let lexicon = load_lexicon(lexicon_path)?;
    let analyzer = Analyzer::with_defaults(&lexicon)?;

    let analysis = match analyzer.analyze(&message) {
        Ok(analysis) => analysis,
        Err(SentimentError::EmptyMessage) => {
            println!("Please enter a valid message.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(err) = &analysis.emotion_error {
        eprintln!("Emotion detection failed: {err}");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print!("{}", render_analysis(&analysis));
    }
    Ok(())
}

/// Human-readable rendering: label and scores, sentiment shares, and the
/// ranked emotion list.
pub(crate) fn render_analysis(analysis: &MessageAnalysis) -> String {
    let s = &analysis.sentiment;
    let mut lines = vec![
        "Analysis Results".to_string(),
        format!("Message: {}", analysis.message.trim()),
        format!(
            "Sentiment: {} (compound: {:.4}, pos: {:.3}, neu: {:.3}, neg: {:.3})",
            s.label, s.compound, s.pos, s.neu, s.neg
        ),
        String::new(),
        "Sentiment Distribution".to_string(),
    ];
    for (label, share) in [("Positive", s.pos), ("Neutral", s.neu), ("Negative", s.neg)] {
        lines.push(format!("  {label:<10}{:>6.1}%  {}", share * 100.0, bar(share)));
    }
    lines.push(String::new());

    lines.push("Emotion Intensities".to_string());
    if analysis.emotions.is_empty() {
        lines.push("- No emotions detected.".to_string());
    } else {
        let max = analysis
            .emotions
            .iter()
            .map(|e| e.score)
            .fold(0.0_f64, f64::max);
        for emotion in &analysis.emotions {
            let relative = if max > 0.0 { emotion.score / max } else { 0.0 };
            lines.push(format!(
                "- {}: {:.4}  {}",
                capitalize(&emotion.emotion),
                emotion.score,
                bar(relative)
            ));
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn bar(fraction: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let width = (fraction.clamp(0.0, 1.0) * BAR_WIDTH).round() as usize;
    "#".repeat(width)
}

pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
