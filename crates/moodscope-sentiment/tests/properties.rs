//! Property tests for labeling, merging and normalization.

use moodscope_sentiment::{
    merge_counts, normalize, word_count, Analyzer, EmotionCounts, Lexicon, SentimentLabel,
};
use proptest::prelude::*;

fn counts_strategy() -> impl Strategy<Value = EmotionCounts> {
    prop::collection::vec(("[a-e]", 0_u32..20), 0..6)
        .prop_map(|entries| entries.into_iter().collect())
}

fn message_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("happy"),
            Just("sad"),
            Just("grateful"),
            Just("not"),
            Just("very"),
            Just("cat"),
            Just("category"),
            Just("today!"),
            Just("the"),
        ],
        1..12,
    )
    .prop_map(|words| words.join(" "))
}

fn lexicon() -> Lexicon {
    let mut lexicon = Lexicon::new();
    lexicon.insert("gratitude", ["grateful", "thankful"]);
    lexicon.insert("pets", ["cat"]);
    lexicon
}

proptest! {
    #[test]
    fn label_is_a_total_function_of_compound(compound in -1.0_f64..=1.0) {
        let label = SentimentLabel::from_compound(compound);
        let expected = if compound >= 0.05 {
            SentimentLabel::Positive
        } else if compound <= -0.05 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        };
        prop_assert_eq!(label, expected);
    }

    #[test]
    fn merge_is_commutative(a in counts_strategy(), b in counts_strategy()) {
        let ab = merge_counts(&a, &b);
        let ba = merge_counts(&b, &a);
        prop_assert_eq!(ab.len(), ba.len());
        for (emotion, count) in ab.iter() {
            prop_assert_eq!(ba.get(emotion), Some(count));
        }
    }

    #[test]
    fn merge_preserves_totals(a in counts_strategy(), b in counts_strategy()) {
        let total = |c: &EmotionCounts| c.iter().map(|(_, n)| u64::from(n)).sum::<u64>();
        prop_assert_eq!(total(&merge_counts(&a, &b)), total(&a) + total(&b));
    }

    #[test]
    fn normalized_profile_is_sorted_and_deterministic(
        counts in counts_strategy(),
        text in message_strategy(),
    ) {
        let first = normalize(&counts, &text);
        let second = normalize(&counts, &text);
        prop_assert_eq!(&first, &second);
        for pair in first.as_slice().windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
        prop_assert!(word_count(&text) >= 1);
    }

    #[test]
    fn analysis_is_repeatable(text in message_strategy()) {
        let analyzer = Analyzer::with_defaults(&lexicon()).unwrap();
        let first = analyzer.analyze(&text).unwrap();
        let second = analyzer.analyze(&text).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn blank_text_never_reaches_normalization(text in "[ \t\n]{0,8}") {
        let analyzer = Analyzer::with_defaults(&lexicon()).unwrap();
        prop_assert!(analyzer.analyze(&text).is_err());
    }
}
