//! End-to-end tests: lexicon file on disk, analysis, batch and text export.

use std::io::Write;

use moodscope_sentiment::{
    load_custom_lexicon, run_batch, write_report, Analyzer, BatchOptions, CollaboratorError,
    EmotionCounts, LexiconStatus, PolarityScores, SentimentError, SentimentLabel, DIVIDER,
};

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("temp file should be created");
    file.write_all(content.as_bytes())
        .expect("temp file should be writable");
    file
}

#[test]
fn csv_lexicon_drives_custom_emotions() {
    let file = write_temp(
        ".csv",
        "Emotion,Keywords\nGratitude,\"grateful, thankful\"\nPets,cat\n",
    );
    let (lexicon, status) = load_custom_lexicon(file.path()).expect("lexicon should load");
    assert_eq!(status, LexiconStatus::Loaded { emotions: 2 });

    let analyzer = Analyzer::with_defaults(&lexicon).expect("analyzer should build");
    let analysis = analyzer
        .analyze("I am so happy and grateful today")
        .expect("analysis should succeed");
    assert_eq!(analysis.custom_counts.get("gratitude"), Some(1));
    assert_eq!(analysis.emotions.get("gratitude"), Some(0.1429));

    let analysis = analyzer
        .analyze("the category is clear")
        .expect("analysis should succeed");
    assert_eq!(analysis.custom_counts.get("pets"), None);

    let analysis = analyzer.analyze("my cat sat").expect("analysis should succeed");
    assert_eq!(analysis.custom_counts.get("pets"), Some(1));
}

#[test]
fn yaml_lexicon_is_supported() {
    let file = write_temp(".yaml", "relief:\n  - phew\n  - finally\n");
    let (lexicon, status) = load_custom_lexicon(file.path()).expect("lexicon should load");
    assert_eq!(status, LexiconStatus::Loaded { emotions: 1 });
    assert_eq!(lexicon.keywords("relief").unwrap(), ["phew", "finally"]);
}

#[test]
fn missing_lexicon_still_analyzes_with_library_emotions() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let path = dir.path().join("custom_emotions.csv");
    let (lexicon, status) = load_custom_lexicon(&path).expect("absence is not an error");
    assert!(matches!(status, LexiconStatus::Unavailable { .. }));

    let analyzer = Analyzer::with_defaults(&lexicon).expect("analyzer should build");
    let analysis = analyzer.analyze("what a terrible, sad day").expect("analysis");
    assert_eq!(analysis.sentiment.label, SentimentLabel::Negative);
    assert!(analysis.emotions.get("sadness").is_some());
    assert!(analysis.custom_counts.is_empty());
}

#[test]
fn empty_input_is_rejected_without_computation() {
    let analyzer = Analyzer::new(
        |_: &str| -> Result<PolarityScores, CollaboratorError> {
            panic!("scorer must not run for empty input")
        },
        |_: &str| -> Result<EmotionCounts, CollaboratorError> {
            panic!("lookup must not run for empty input")
        },
        &moodscope_sentiment::Lexicon::new(),
    )
    .expect("analyzer should build");

    let result = analyzer.analyze("");
    assert!(
        matches!(result, Err(SentimentError::EmptyMessage)),
        "expected EmptyMessage, got: {result:?}"
    );
}

#[test]
fn batch_report_round_trips_to_disk() {
    let (lexicon, _) = load_custom_lexicon(std::path::Path::new("/nonexistent/lexicon.csv"))
        .expect("absence is not an error");
    let analyzer = Analyzer::with_defaults(&lexicon).expect("analyzer should build");

    let input = "id,Message,channel\n1,I love my friends,chat\n2,,chat\n3,I hate waiting,mail\n";
    let aggregate = run_batch(&analyzer, input.as_bytes(), &BatchOptions::default())
        .expect("batch should run");
    assert_eq!(aggregate.processed, 2);
    assert_eq!(aggregate.skipped, 1);
    assert_eq!(aggregate.label_counts.positive, 1);
    assert_eq!(aggregate.label_counts.negative, 1);

    let dir = tempfile::tempdir().expect("temp dir should be created");
    let path = dir.path().join("report.txt");
    write_report(&path, &aggregate.report).expect("report should be written");
    let written = std::fs::read_to_string(&path).expect("report should be readable");
    assert_eq!(written, aggregate.report);
    assert_eq!(written.matches(DIVIDER).count(), 2);
    assert!(written.starts_with("Message: I love my friends\nSentiment: Positive"));
}

#[test]
fn analysis_serializes_to_json() {
    let mut lexicon = moodscope_sentiment::Lexicon::new();
    lexicon.insert("gratitude", ["grateful"]);
    let analyzer = Analyzer::with_defaults(&lexicon).expect("analyzer should build");
    let analysis = analyzer.analyze("so grateful").expect("analysis");
    let json = serde_json::to_value(&analysis).expect("analysis should serialize");
    assert_eq!(json["sentiment"]["label"], "Positive");
    assert_eq!(json["custom_counts"]["gratitude"], 1);
    assert_eq!(json["emotions"][0]["emotion"], "positive");
    assert!(json.get("emotion_error").is_none());
}
