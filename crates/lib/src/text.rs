//! # Text Normalization
//!
//! The canonicalization step every downstream stage builds on, plus the
//! fixed English stopword list shared by the keyword extractor and the
//! similarity scorer.

use std::collections::HashSet;

/// Cleans raw extracted text into its canonical form.
///
/// Runs of whitespace (including newlines) collapse to single spaces, the
/// ends are trimmed, and characters outside the allow-set (word characters,
/// whitespace, `@ . + - ( ) & ,`) are dropped. Total and idempotent:
/// `normalize(normalize(t)) == normalize(t)` for all `t`.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if !is_allowed(c) {
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(c);
    }
    out
}

/// The character allow-set: `\w`, plus punctuation that carries meaning in
/// resumes (emails, phone numbers, "C++", "R&D").
fn is_allowed(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '@' | '.' | '+' | '-' | '(' | ')' | '&' | ',')
}

/// Builds the default English stopword set.
///
/// Scores are only reproducible for a fixed vocabulary; this list is the
/// fixed vocabulary baseline. Callers that need different filtering pass
/// their own set through the component configs.
pub fn english_stopwords() -> HashSet<String> {
    ENGLISH_STOPWORDS.iter().map(|w| w.to_string()).collect()
}

pub const ENGLISH_STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just",
    "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once",
    "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she",
    "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours", "yourself",
    "yourselves",
];
