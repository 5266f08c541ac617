//! Custom emotion lexicon: emotion name to whole-word keywords.
//!
//! Loaded once at startup from CSV (`Emotion`,`Keywords` columns, keywords
//! comma-separated) or YAML (mapping of emotion to a keyword list). A missing
//! file is not an error: the caller gets an empty lexicon and
//! [`LexiconStatus::Unavailable`] so it can warn once and carry on.

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::SentimentError;

/// Emotion name to keyword list, in first-seen order.
///
/// Names and keywords are trimmed and lowercased. Keywords are unique per
/// emotion and never empty; an emotion always has at least one keyword.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    emotions: Vec<(String, Vec<String>)>,
}

/// Outcome of [`load_custom_lexicon`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconStatus {
    Loaded { emotions: usize },
    Unavailable { path: PathBuf },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum YamlKeywords {
    List(Vec<String>),
    Joined(String),
}

impl Lexicon {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an emotion's keywords.
    ///
    /// A name seen before keeps its position and gets the new keywords.
    /// Returns `false` (and changes nothing) when the name is blank or no
    /// non-empty keyword remains after normalization.
    pub fn insert<I, S>(&mut self, emotion: &str, keywords: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = emotion.trim().to_lowercase();
        if name.is_empty() {
            return false;
        }

        let mut normalized: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword = keyword.as_ref().trim().to_lowercase();
            if !keyword.is_empty() && !normalized.contains(&keyword) {
                normalized.push(keyword);
            }
        }
        if normalized.is_empty() {
            return false;
        }

        if let Some(entry) = self.emotions.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = normalized;
        } else {
            self.emotions.push((name, normalized));
        }
        true
    }

    #[must_use]
    pub fn keywords(&self, emotion: &str) -> Option<&[String]> {
        self.emotions
            .iter()
            .find(|(name, _)| name == emotion)
            .map(|(_, keywords)| keywords.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.emotions
            .iter()
            .map(|(name, keywords)| (name.as_str(), keywords.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.emotions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.emotions.is_empty()
    }

    /// Parse a CSV lexicon with `Emotion` and `Keywords` header columns.
    ///
    /// Header names are matched trimmed and case-insensitively. Rows missing
    /// either cell, or with nothing usable in it, are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::LexiconSchema`] if either column is absent,
    /// or [`SentimentError::Csv`] if the header row cannot be read.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, SentimentError> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let find = |wanted: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(wanted))
        };
        let (Some(emotion_idx), Some(keywords_idx)) = (find("emotion"), find("keywords")) else {
            return Err(SentimentError::LexiconSchema(format!(
                "expected 'Emotion' and 'Keywords' columns, found: {}",
                headers.iter().collect::<Vec<_>>().join(", ")
            )));
        };

        let mut lexicon = Self::new();
        for (row, record) in rdr.records().enumerate() {
            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    tracing::debug!(row, error = %e, "skipping unreadable lexicon row");
                    continue;
                }
            };
            let (Some(emotion), Some(keywords)) = (record.get(emotion_idx), record.get(keywords_idx))
            else {
                tracing::debug!(row, "skipping lexicon row with missing cells");
                continue;
            };
            if !lexicon.insert(emotion, keywords.split(',')) {
                tracing::debug!(row, emotion, "skipping lexicon row with no usable keywords");
            }
        }

        Ok(lexicon)
    }

    /// Parse a YAML lexicon: a mapping from emotion name to either a list of
    /// keywords or a single comma-separated string.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::LexiconParse`] if the document is not a mapping.
    pub fn from_yaml_str(content: &str) -> Result<Self, SentimentError> {
        let mapping: serde_yaml::Mapping = serde_yaml::from_str(content)
            .map_err(|e| SentimentError::LexiconParse(e.to_string()))?;

        let mut lexicon = Self::new();
        for (key, value) in mapping {
            let Some(emotion) = key.as_str() else {
                tracing::debug!(?key, "skipping lexicon entry with non-string name");
                continue;
            };
            let inserted = match serde_yaml::from_value::<YamlKeywords>(value) {
                Ok(YamlKeywords::List(list)) => lexicon.insert(emotion, list),
                Ok(YamlKeywords::Joined(joined)) => lexicon.insert(emotion, joined.split(',')),
                Err(_) => false,
            };
            if !inserted {
                tracing::debug!(emotion, "skipping lexicon entry with no usable keywords");
            }
        }

        Ok(lexicon)
    }
}

/// Load the custom lexicon from `path`.
///
/// `.yaml`/`.yml` files are parsed as YAML, anything else as CSV. A file that
/// does not exist yields an empty lexicon with [`LexiconStatus::Unavailable`].
///
/// # Errors
///
/// Returns [`SentimentError::Io`] if the file exists but cannot be read, or a
/// parse/schema error if its contents are unusable.
pub fn load_custom_lexicon(path: &Path) -> Result<(Lexicon, LexiconStatus), SentimentError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "custom lexicon not found");
            return Ok((
                Lexicon::new(),
                LexiconStatus::Unavailable {
                    path: path.to_path_buf(),
                },
            ));
        }
        Err(e) => {
            return Err(SentimentError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let lexicon = if is_yaml {
        Lexicon::from_yaml_str(&content)?
    } else {
        Lexicon::from_csv_reader(content.as_bytes())?
    };

    tracing::info!(
        path = %path.display(),
        emotions = lexicon.len(),
        "custom lexicon loaded"
    );
    let status = LexiconStatus::Loaded {
        emotions: lexicon.len(),
    };
    Ok((lexicon, status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_rows_are_normalized() {
        let csv = "Emotion,Keywords\n  Gratitude ,\"Grateful, THANKFUL ,thanks\"\n";
        let lexicon = Lexicon::from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(lexicon.len(), 1);
        assert_eq!(
            lexicon.keywords("gratitude").unwrap(),
            ["grateful", "thankful", "thanks"]
        );
    }

    #[test]
    fn csv_header_match_is_case_insensitive() {
        let csv = "keywords,EMOTION\n\"calm,serene\",peace\n";
        let lexicon = Lexicon::from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(lexicon.keywords("peace").unwrap(), ["calm", "serene"]);
    }

    #[test]
    fn csv_missing_keywords_column_is_schema_error() {
        let csv = "Emotion,Words\njoy,happy\n";
        let result = Lexicon::from_csv_reader(csv.as_bytes());
        assert!(
            matches!(result, Err(SentimentError::LexiconSchema(_))),
            "expected LexiconSchema, got: {result:?}"
        );
    }

    #[test]
    fn csv_malformed_rows_are_skipped() {
        let csv = "Emotion,Keywords\nawe\n,orphan\nhope,\"  ,  \"\nrelief,phew\n";
        let lexicon = Lexicon::from_csv_reader(csv.as_bytes()).unwrap();
        let names: Vec<&str> = lexicon.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["relief"]);
    }

    #[test]
    fn duplicate_emotion_replaces_keywords_in_place() {
        let csv = "Emotion,Keywords\nhope,wish\nawe,wow\nHope,\"dream,aspire\"\n";
        let lexicon = Lexicon::from_csv_reader(csv.as_bytes()).unwrap();
        let names: Vec<&str> = lexicon.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["hope", "awe"]);
        assert_eq!(lexicon.keywords("hope").unwrap(), ["dream", "aspire"]);
    }

    #[test]
    fn duplicate_keywords_are_collapsed() {
        let mut lexicon = Lexicon::new();
        assert!(lexicon.insert("joy", ["yay", "YAY", " yay "]));
        assert_eq!(lexicon.keywords("joy").unwrap(), ["yay"]);
    }

    #[test]
    fn yaml_accepts_lists_and_joined_strings() {
        let yaml = "gratitude:\n  - grateful\n  - Thankful\nrelief: \"phew, finally\"\nempty: []\n";
        let lexicon = Lexicon::from_yaml_str(yaml).unwrap();
        assert_eq!(lexicon.len(), 2);
        assert_eq!(
            lexicon.keywords("gratitude").unwrap(),
            ["grateful", "thankful"]
        );
        assert_eq!(lexicon.keywords("relief").unwrap(), ["phew", "finally"]);
    }

    #[test]
    fn yaml_non_mapping_is_parse_error() {
        let result = Lexicon::from_yaml_str("- just\n- a list\n");
        assert!(
            matches!(result, Err(SentimentError::LexiconParse(_))),
            "expected LexiconParse, got: {result:?}"
        );
    }

    #[test]
    fn missing_file_is_unavailable_not_error() {
        let path = Path::new("/definitely/not/here/custom_emotions.csv");
        let (lexicon, status) = load_custom_lexicon(path).unwrap();
        assert!(lexicon.is_empty());
        assert_eq!(
            status,
            LexiconStatus::Unavailable {
                path: path.to_path_buf()
            }
        );
    }
}
