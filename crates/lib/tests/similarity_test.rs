//! # Similarity Scorer Tests
//!
//! Note: similarity is call-local, not globally calibrated. The vector
//! space (and its IDF weights) is rebuilt over exactly the two texts of
//! each call, so scores are only meaningful within a call.

use atsrank::{TfidfConfig, TfidfScorer};

fn scorer() -> TfidfScorer {
    TfidfScorer::new(TfidfConfig::default()).expect("default config compiles")
}

/// Empty input on either side resolves to 0.0 without touching the vector
/// model.
#[test]
fn empty_inputs_score_zero() {
    let scorer = scorer();
    assert_eq!(scorer.score("", "anything"), 0.0);
    assert_eq!(scorer.score("anything", ""), 0.0);
    assert_eq!(scorer.score("", ""), 0.0);
    assert_eq!(scorer.score("   \n ", "anything"), 0.0);
}

/// Identical texts are maximally similar.
#[test]
fn identical_texts_score_one() {
    let text = "experienced rust developer building distributed systems";
    let score = scorer().score(text, text);
    assert!(score > 0.999, "expected ~1.0, got {score}");
}

/// Texts with no shared vocabulary score zero.
#[test]
fn disjoint_texts_score_zero() {
    let score = scorer().score(
        "rust tokio asynchronous networking",
        "watercolor painting landscapes brushwork",
    );
    assert!(score.abs() < 1e-9, "expected 0.0, got {score}");
}

/// Partial overlap lands strictly between the extremes.
#[test]
fn partial_overlap_scores_in_between() {
    let score = scorer().score(
        "python developer with sql experience",
        "python developer with cloud experience",
    );
    assert!(score > 0.0 && score < 1.0, "got {score}");
}

/// Stopword-only texts have no vocabulary left and score zero.
#[test]
fn stopword_only_texts_score_zero() {
    assert_eq!(scorer().score("the and of", "was were being"), 0.0);
}

/// The score is bounded to [0, 1] across assorted inputs.
#[test]
fn score_is_bounded() {
    let scorer = scorer();
    let samples = [
        ("rust rust rust", "rust"),
        ("a b c", "c b a"),
        ("completely different words here", "nothing shared whatsoever friend"),
        ("mixed overlap rust python", "rust python mixed overlap"),
    ];
    for (a, b) in samples {
        let score = scorer.score(a, b);
        assert!((0.0..=1.0).contains(&score), "score {score} for ({a}, {b})");
    }
}

/// The vocabulary cap keeps only the most frequent corpus terms but the
/// score still reflects what remains.
#[test]
fn max_features_caps_vocabulary() {
    let scorer = TfidfScorer::new(TfidfConfig {
        max_features: 2,
        ..TfidfConfig::default()
    })
    .unwrap();

    // "shared" dominates both texts and survives the cap, so similarity
    // stays positive even though rarer terms are dropped.
    let score = scorer.score(
        "shared shared shared unique1 unique2 unique3",
        "shared shared shared other1 other2 other3",
    );
    assert!(score > 0.0);
}
