//! Whole-word keyword matching against the custom lexicon.

use regex::Regex;

use crate::error::SentimentError;
use crate::lexicon::Lexicon;
use crate::types::EmotionCounts;

/// Compiled word-boundary patterns for every keyword of a [`Lexicon`].
///
/// Built once per lexicon and reused for every message.
#[derive(Debug, Clone, Default)]
pub struct KeywordMatcher {
    rules: Vec<(String, Vec<Regex>)>,
}

impl KeywordMatcher {
    /// Compile `\b<keyword>\b` patterns for each keyword in `lexicon`.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Pattern`] if a pattern fails to compile
    /// (for example, one exceeding the regex size limit).
    pub fn new(lexicon: &Lexicon) -> Result<Self, SentimentError> {
        let mut rules = Vec::with_capacity(lexicon.len());
        for (emotion, keywords) in lexicon.iter() {
            let patterns = keywords
                .iter()
                .map(|kw| Regex::new(&format!(r"\b{}\b", regex::escape(kw))))
                .collect::<Result<Vec<_>, _>>()?;
            rules.push((emotion.to_string(), patterns));
        }
        Ok(Self { rules })
    }

    /// Count whole-word, case-insensitive keyword hits per emotion.
    ///
    /// Hits from different keywords of one emotion are summed. Emotions with
    /// no hits are left out.
    #[must_use]
    pub fn count(&self, text: &str) -> EmotionCounts {
        let lowered = text.to_lowercase();
        let mut counts = EmotionCounts::new();
        for (emotion, patterns) in &self.rules {
            let hits: usize = patterns
                .iter()
                .map(|re| re.find_iter(&lowered).count())
                .sum();
            if hits > 0 {
                counts.add(emotion, u32::try_from(hits).unwrap_or(u32::MAX));
            }
        }
        counts
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(entries: &[(&str, &[&str])]) -> KeywordMatcher {
        let mut lexicon = Lexicon::new();
        for (emotion, keywords) in entries {
            lexicon.insert(emotion, keywords.iter());
        }
        KeywordMatcher::new(&lexicon).unwrap()
    }

    #[test]
    fn keyword_inside_longer_word_does_not_match() {
        let m = matcher(&[("pets", &["cat"])]);
        assert!(m.count("the category is clear").is_empty());
    }

    #[test]
    fn standalone_keyword_matches_once() {
        let m = matcher(&[("pets", &["cat"])]);
        assert_eq!(m.count("my cat sat").get("pets"), Some(1));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let m = matcher(&[("gratitude", &["grateful"])]);
        assert_eq!(m.count("So GRATEFUL. Grateful!").get("gratitude"), Some(2));
    }

    #[test]
    fn keywords_of_one_emotion_are_additive() {
        let m = matcher(&[("gratitude", &["grateful", "thankful"])]);
        let counts = m.count("grateful and thankful, truly thankful");
        assert_eq!(counts.get("gratitude"), Some(3));
    }

    #[test]
    fn multi_word_keyword_matches_phrase() {
        let m = matcher(&[("relief", &["thank god"])]);
        assert_eq!(m.count("Thank God it is over").get("relief"), Some(1));
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let m = matcher(&[("surprise", &["o.o"])]);
        assert!(m.count("oxo").is_empty());
        assert_eq!(m.count("o.o wow").get("surprise"), Some(1));
    }

    #[test]
    fn zero_count_emotions_are_omitted_and_order_follows_lexicon() {
        let m = matcher(&[("awe", &["wow"]), ("calm", &["serene"]), ("joy", &["yay"])]);
        let counts = m.count("yay, wow");
        let entries: Vec<_> = counts.iter().collect();
        assert_eq!(entries, vec![("awe", 1), ("joy", 1)]);
    }

    #[test]
    fn empty_lexicon_matches_nothing() {
        let m = KeywordMatcher::new(&Lexicon::new()).unwrap();
        assert!(m.is_empty());
        assert!(m.count("anything at all").is_empty());
    }
}
