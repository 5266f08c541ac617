//! Custom lexicon loading shared by every command.

use std::path::{Path, PathBuf};

use moodscope_sentiment::{load_custom_lexicon, Lexicon, LexiconStatus, SentimentError};

/// Load the custom lexicon, warning once on stderr when it is absent.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub(crate) fn load_lexicon(path: &Path) -> anyhow::Result<Lexicon> {
    let (lexicon, status) = load_custom_lexicon(path)?;
    if let Some(warning) = unavailable_warning(status) {
        eprintln!("{warning}");
    }
    Ok(lexicon)
}

/// Warning shown when the custom lexicon file is absent, `None` otherwise.
pub(crate) fn unavailable_warning(status: LexiconStatus) -> Option<String> {
    match status {
        LexiconStatus::Unavailable { path } => Some(missing_lexicon_warning(path)),
        LexiconStatus::Loaded { .. } => None,
    }
}

fn missing_lexicon_warning(path: PathBuf) -> String {
    let err = SentimentError::LexiconUnavailable { path };
    format!("warning: {err}; continuing without custom emotions")
}

/// Print the custom lexicon as a two-column table.
///
/// # Errors
///
/// Returns an error if the lexicon cannot be loaded.
pub(crate) fn run_lexicon_list(path: &Path) -> anyhow::Result<()> {
    let lexicon = load_lexicon(path)?;
    if lexicon.is_empty() {
        println!("no custom emotions loaded");
        return Ok(());
    }
    print!("{}", render_lexicon(&lexicon));
    Ok(())
}

pub(crate) fn render_lexicon(lexicon: &Lexicon) -> String {
    let mut out = format!("{:<20}KEYWORDS\n", "EMOTION");
    for (emotion, keywords) in lexicon.iter() {
        out.push_str(&format!("{:<20}{}\n", emotion, keywords.join(", ")));
    }
    out
}
