//! # Skill Matcher Tests

use atsrank::match_skills;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Partial required match with no preferred skills: one of two required
/// skills matched gives a 50% required rate and a 40.0 overall score under
/// the 0.8/0.2 weighting.
#[test]
fn partial_required_match_scores_forty() {
    let result = match_skills(
        &strings(&["python", "sql"]),
        &strings(&["Python", "Java"]),
        &[],
    );

    assert_eq!(result.matched_required, strings(&["python"]));
    assert_eq!(result.missing_required, strings(&["java"]));
    assert!(result.matched_preferred.is_empty());
    assert_eq!(result.required_match_rate, 50.0);
    assert_eq!(result.preferred_match_rate, 0.0);
    assert_eq!(result.overall_score, 40.0);
}

/// An empty resume skill set short-circuits to a zero score, echoing the
/// required skills back verbatim (original casing preserved).
#[test]
fn empty_resume_skills_short_circuits() {
    let result = match_skills(&[], &strings(&["Python"]), &strings(&["Docker"]));

    assert_eq!(result.overall_score, 0.0);
    assert_eq!(result.missing_required, strings(&["Python"]));
    assert!(result.matched_required.is_empty());
    assert!(result.matched_preferred.is_empty());
}

/// Containment matching is bidirectional: either string appearing inside
/// the other counts.
#[test]
fn containment_matching_is_bidirectional() {
    // Resume skill contains the required skill.
    let result = match_skills(
        &strings(&["python programming"]),
        &strings(&["Python"]),
        &[],
    );
    assert_eq!(result.matched_required, strings(&["python"]));

    // Required skill contains the resume skill.
    let result = match_skills(
        &strings(&["python"]),
        &strings(&["Python programming"]),
        &[],
    );
    assert_eq!(result.matched_required, strings(&["python programming"]));
}

/// The known permissive edge of containment matching: "java" matches
/// "javascript". Tightening this would change observable scores, so the
/// behavior is pinned here.
#[test]
fn java_substring_matches_javascript() {
    let result = match_skills(&strings(&["javascript"]), &strings(&["Java"]), &[]);
    assert_eq!(result.matched_required, strings(&["java"]));
}

/// Preferred skills are matched independently and weighted at 20%.
#[test]
fn preferred_skills_contribute_twenty_percent() {
    let result = match_skills(
        &strings(&["rust", "docker"]),
        &strings(&["Rust"]),
        &strings(&["Docker", "Kubernetes"]),
    );

    assert_eq!(result.matched_required, strings(&["rust"]));
    assert_eq!(result.matched_preferred, strings(&["docker"]));
    assert_eq!(result.required_match_rate, 100.0);
    assert_eq!(result.preferred_match_rate, 50.0);
    // 1.0 * 0.8 + 0.5 * 0.2 = 0.9
    assert!((result.overall_score - 90.0).abs() < 1e-9);
}

/// With no required skills at all, the required rate is a vacuous 100%.
#[test]
fn empty_required_list_cannot_be_failed() {
    let result = match_skills(&strings(&["rust"]), &[], &strings(&["Go"]));
    assert_eq!(result.required_match_rate, 100.0);
    assert_eq!(result.preferred_match_rate, 0.0);
    assert_eq!(result.overall_score, 80.0);
}

/// Adding a resume skill that satisfies a previously-unmatched required
/// skill grows `matched_required` and never lowers the overall score.
#[test]
fn adding_a_matching_skill_is_monotonic() {
    let required = strings(&["Python", "Java", "SQL"]);
    let before = match_skills(&strings(&["python"]), &required, &[]);
    let after = match_skills(&strings(&["python", "java"]), &required, &[]);

    assert!(after.matched_required.len() > before.matched_required.len());
    assert!(after.overall_score >= before.overall_score);
}

/// Skill normalization trims and lowercases at match time only.
#[test]
fn skills_are_normalized_at_match_time() {
    let result = match_skills(
        &strings(&["  PYTHON  "]),
        &strings(&["python"]),
        &[],
    );
    assert_eq!(result.matched_required, strings(&["python"]));
    assert_eq!(result.overall_score, 80.0);
}

/// Scores stay within [0, 100] across representative inputs.
#[test]
fn overall_score_is_bounded() {
    let cases: &[(Vec<String>, Vec<String>, Vec<String>)] = &[
        (strings(&["a1", "b2"]), strings(&["a1"]), strings(&["b2"])),
        (strings(&["rust"]), vec![], vec![]),
        (vec![], strings(&["rust"]), vec![]),
        (
            strings(&["rust", "go", "sql"]),
            strings(&["rust", "go", "sql"]),
            strings(&["rust", "go", "sql"]),
        ),
    ];

    for (resume, required, preferred) in cases {
        let result = match_skills(resume, required, preferred);
        assert!(
            (0.0..=100.0).contains(&result.overall_score),
            "score {} out of bounds",
            result.overall_score
        );
    }
}

/// A job skill is counted once even when several resume skills contain it.
#[test]
fn no_double_counting() {
    let result = match_skills(
        &strings(&["python", "python scripting", "python programming"]),
        &strings(&["Python"]),
        &[],
    );
    assert_eq!(result.matched_required.len(), 1);
    assert_eq!(result.required_match_rate, 100.0);
}
