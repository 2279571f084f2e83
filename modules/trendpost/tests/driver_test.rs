//! Interactive sessions driven through in-memory stdin/stdout.

use std::io::{Cursor, Write};

use ai_client::{AiError, Completion};
use trendpost::style::INSTAGRAM_STYLE;
use trendpost::testing::{StaticTrendProvider, StubCompletion};
use trendpost::{Driver, FileTrendProvider, Presets, TrendPostError, TrendProvider};

fn provider() -> StaticTrendProvider {
    StaticTrendProvider::from_titles(
        &["#newmusic", "#pop"],
        &["Midnight Drive", "Summer Haze", "Neon Lights"],
    )
}

#[tokio::test]
async fn full_session_prints_list_and_post() {
    let stub = StubCompletion::replying(Completion::structured("Neon Lights is pure joy"));
    let driver = Driver::new(provider(), stub.clone());

    let mut input = Cursor::new("3\nEnergetic\nSHORT\nInstagram\n");
    let mut output = Vec::new();
    let post = driver.run(&mut input, &mut output).await.unwrap();

    assert_eq!(post.as_str(), "Neon Lights is pure joy");

    let printed = String::from_utf8(output).unwrap();
    assert!(printed.contains("Trending Songs:\n1. Midnight Drive\n2. Summer Haze\n3. Neon Lights\n"));
    assert!(printed.contains("Generated Content:\n\nNeon Lights is pure joy\n"));

    let prompt = stub.last_prompt().unwrap();
    assert!(prompt.contains("about the song \"Neon Lights\""));
    assert!(prompt.contains("- Tone: energetic"));
    assert!(prompt.contains("Write a short post for instagram"));
    assert!(prompt.contains("- Hashtags: #newmusic, #pop"));
    assert!(prompt.ends_with(INSTAGRAM_STYLE));
}

#[tokio::test]
async fn presets_skip_questions() {
    let stub = StubCompletion::replying(Completion::structured("ok"));
    let driver = Driver::new(provider(), stub.clone()).with_presets(Presets {
        song: Some(1),
        tone: Some("Funny".into()),
        length: Some("long".into()),
        platform: Some("Blog Post".into()),
    });

    let mut input = Cursor::new("");
    let mut output = Vec::new();
    driver.run(&mut input, &mut output).await.unwrap();

    let printed = String::from_utf8(output).unwrap();
    assert!(!printed.contains("Select a song"));
    assert!(!printed.contains("Enter the tone"));

    let prompt = stub.last_prompt().unwrap();
    assert!(prompt.contains("\"Midnight Drive\""));
    assert!(prompt.contains("Write a long post for blog post"));
    assert!(prompt.contains("- Tone: funny"));
}

#[tokio::test]
async fn out_of_range_selection_never_calls_the_model() {
    let stub = StubCompletion::replying(Completion::structured("unused"));
    let driver = Driver::new(provider(), stub.clone());

    let mut input = Cursor::new("9\nneutral\nshort\ntwitter\n");
    let mut output = Vec::new();
    let err = driver.run(&mut input, &mut output).await.unwrap_err();

    assert!(matches!(
        err,
        TrendPostError::InvalidSelection { ref input, available: 3 } if input == "9"
    ));
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn trend_failure_aborts_before_listing() {
    let trends = std::sync::Arc::new(StaticTrendProvider::failing("youtube unavailable"));
    let stub = StubCompletion::replying(Completion::structured("unused"));
    let driver = Driver::new(trends.clone(), stub.clone());

    let mut input = Cursor::new("1\n");
    let mut output = Vec::new();
    let err = driver.run(&mut input, &mut output).await.unwrap_err();

    assert!(matches!(err, TrendPostError::TrendFetch(ref m) if m == "youtube unavailable"));
    assert!(!String::from_utf8(output).unwrap().contains("Trending Songs"));
    assert_eq!(trends.fetches(), 1);
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn completion_failure_is_returned_not_printed() {
    let stub = StubCompletion::failing(|| AiError::Network("timed out".into()));
    let driver = Driver::new(provider(), stub);

    let mut input = Cursor::new("2\nneutral\nshort\ntiktok\n");
    let mut output = Vec::new();
    let err = driver.run(&mut input, &mut output).await.unwrap_err();

    assert!(matches!(err, TrendPostError::ExternalService(AiError::Network(_))));
    assert!(!String::from_utf8(output).unwrap().contains("Generated Content"));
}

#[tokio::test]
async fn file_provider_reads_snapshot() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r##"{{"hashtags": ["#newmusic"], "titles": ["Midnight Drive", "Summer Haze"]}}"##
    )
    .unwrap();

    let snapshot = FileTrendProvider::new(file.path())
        .fetch_trends()
        .await
        .unwrap();

    assert_eq!(snapshot.hashtags, vec!["#newmusic".to_string()]);
    assert_eq!(snapshot.title(2), Some("Summer Haze"));
}

#[tokio::test]
async fn file_provider_errors_are_trend_fetch_errors() {
    let missing = FileTrendProvider::new("/definitely/not/here.json")
        .fetch_trends()
        .await
        .unwrap_err();
    assert!(matches!(missing, TrendPostError::TrendFetch(_)));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"hashtags": [], "titles": []}}"#).unwrap();
    let empty = FileTrendProvider::new(file.path())
        .fetch_trends()
        .await
        .unwrap_err();
    assert!(matches!(empty, TrendPostError::TrendFetch(_)));
}
