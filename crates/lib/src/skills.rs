//! # Skill Matching
//!
//! Weighted containment matching between a candidate's skills and a job's
//! required/preferred skill lists. Pure computation with no failure mode
//! beyond the empty-resume short-circuit.

use crate::types::SkillMatch;

const REQUIRED_WEIGHT: f64 = 0.8;
const PREFERRED_WEIGHT: f64 = 0.2;

/// Computes a weighted match score between resume skills and a job's skill
/// lists.
///
/// Matching is bidirectional containment: a required skill counts as matched
/// when it is a substring of any resume skill or any resume skill is a
/// substring of it. This deliberately tolerates phrasing differences
/// ("Python" vs "Python programming") at the cost of occasional false
/// positives ("java" matches "javascript"); tightening it would change
/// observable scores.
///
/// All comparisons run over lowercased, trimmed copies; the caller's lists
/// are never mutated. An empty `resume_skills` short-circuits to a zero
/// score with `missing_required` echoing `required_skills` verbatim.
pub fn match_skills(
    resume_skills: &[String],
    required_skills: &[String],
    preferred_skills: &[String],
) -> SkillMatch {
    if resume_skills.is_empty() {
        return SkillMatch {
            overall_score: 0.0,
            matched_required: Vec::new(),
            matched_preferred: Vec::new(),
            missing_required: required_skills.to_vec(),
            required_match_rate: 0.0,
            preferred_match_rate: 0.0,
        };
    }

    let normalize_all =
        |skills: &[String]| -> Vec<String> { skills.iter().map(|s| s.trim().to_lowercase()).collect() };

    let resume_norm = normalize_all(resume_skills);
    let required_norm = normalize_all(required_skills);
    let preferred_norm = normalize_all(preferred_skills);

    let matched_required = containment_matches(&required_norm, &resume_norm);
    let matched_preferred = containment_matches(&preferred_norm, &resume_norm);

    // An empty required list cannot be failed; an empty preferred list
    // contributes nothing.
    let required_rate = if required_norm.is_empty() {
        1.0
    } else {
        matched_required.len() as f64 / required_norm.len() as f64
    };
    let preferred_rate = if preferred_norm.is_empty() {
        0.0
    } else {
        matched_preferred.len() as f64 / preferred_norm.len() as f64
    };

    let overall_score = (required_rate * REQUIRED_WEIGHT + preferred_rate * PREFERRED_WEIGHT) * 100.0;

    let missing_required = required_norm
        .iter()
        .filter(|skill| !matched_required.contains(*skill))
        .cloned()
        .collect();

    SkillMatch {
        overall_score,
        matched_required,
        matched_preferred,
        missing_required,
        required_match_rate: required_rate * 100.0,
        preferred_match_rate: preferred_rate * 100.0,
    }
}

/// Collects the job skills that containment-match any resume skill. The
/// first qualifying resume skill settles a job skill; no double counting.
fn containment_matches(job_skills: &[String], resume_skills: &[String]) -> Vec<String> {
    job_skills
        .iter()
        .filter(|job_skill| {
            resume_skills
                .iter()
                .any(|resume_skill| {
                    resume_skill.contains(job_skill.as_str())
                        || job_skill.contains(resume_skill.as_str())
                })
        })
        .cloned()
        .collect()
}
