//! # Text Normalizer Tests

use atsrank::normalize;

/// Runs of whitespace, including newlines and tabs, collapse to single
/// spaces and the ends are trimmed.
#[test]
fn whitespace_collapses() {
    assert_eq!(normalize("  hello \n\n world\t!  "), "hello world");
    assert_eq!(normalize("one two"), "one two");
}

/// Characters outside the allow-set are removed; meaningful resume
/// punctuation survives.
#[test]
fn character_filtering() {
    assert_eq!(normalize("C++ & R&D (remote), a@b.co"), "C++ & R&D (remote), a@b.co");
    assert_eq!(normalize("price: $100 #1 [best]"), "price 100 1 best");
    assert_eq!(normalize("slash/and\\backslash"), "slashandbackslash");
}

/// Normalization is idempotent: a second pass changes nothing, even when a
/// removed character sat between spaces.
#[test]
fn normalize_is_idempotent() {
    let samples = [
        "  hello \n world ",
        "a # b",
        "x  $  y",
        "",
        "already clean text",
        "émigré café — résumé",
    ];
    for s in samples {
        let once = normalize(s);
        assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
    }
}

/// Total function: weird input never fails, it just normalizes.
#[test]
fn degenerate_inputs() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("   "), "");
    assert_eq!(normalize("\u{0}\u{7f}"), "");
}
