//! # Contact Extractor Tests
//!
//! These run over raw (non-normalized) text on purpose: the URL patterns
//! depend on `/`, which normalization strips.

use atsrank::ContactExtractor;

fn extractor() -> ContactExtractor {
    ContactExtractor::new().expect("patterns compile")
}

/// Email and LinkedIn found, phone and GitHub independently empty.
#[test]
fn email_and_linkedin_only() {
    let info = extractor().extract("Reach me at a.b@x.com or linkedin.com/in/janedoe");

    assert_eq!(info.email, "a.b@x.com");
    assert_eq!(info.linkedin, "https://linkedin.com/in/janedoe");
    assert_eq!(info.phone, "");
    assert_eq!(info.github, "");
}

/// First occurrence wins when a field matches more than once.
#[test]
fn first_match_wins() {
    let info = extractor().extract("primary@example.com, backup@example.org");
    assert_eq!(info.email, "primary@example.com");
}

/// North-American phone layouts: country code, parenthesized area code,
/// and space/dot/hyphen separators.
#[test]
fn phone_layouts() {
    let cases = [
        ("Call +1 (555) 123-4567 today", "+1 (555) 123-4567"),
        ("Tel: 555.123.4567", "555.123.4567"),
        ("Mobile 555-123-4567", "555-123-4567"),
        ("Raw 5551234567", "5551234567"),
    ];
    for (text, expected) in cases {
        assert_eq!(extractor().extract(text).phone, expected, "input: {text}");
    }
}

/// Profile URLs are reported with an https:// prefix whether or not the
/// resume spelled one, and matching is case-insensitive.
#[test]
fn profile_urls_get_https_prefix() {
    let info = extractor().extract("See GitHub.com/jane-doe and https://LinkedIn.com/in/jane_doe");
    assert_eq!(info.github, "https://GitHub.com/jane-doe");
    assert_eq!(info.linkedin, "https://LinkedIn.com/in/jane_doe");
}

/// Text with no identifiers yields all-empty fields.
#[test]
fn no_matches_yield_empty_fields() {
    let info = extractor().extract("A resume with no contact details at all.");
    assert_eq!(info.email, "");
    assert_eq!(info.phone, "");
    assert_eq!(info.linkedin, "");
    assert_eq!(info.github, "");
}
