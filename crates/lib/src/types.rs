//! # Core Data Model
//!
//! All of the value types that flow through the matching pipeline. Every type
//! here is a plain serializable structure: callers may persist an
//! [`AnalysisReport`] as JSON without further transformation.
//!
//! The structured-profile types (`ResumeData`, `JobRequirements`,
//! `AtsAnalysis`) are produced by the external semantic-extraction service.
//! Every field carries a serde default so that partial or slightly malformed
//! model output still deserializes instead of failing the whole record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Contact identifiers located in raw resume text by pattern matching.
///
/// An empty string means "not found". Extraction runs over the raw
/// (non-normalized) text because case and punctuation matter for the
/// patterns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
    pub skills_used: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub gpa: String,
    pub relevant_courses: Vec<String>,
}

/// Structured resume profile returned by the semantic-extraction service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
    pub projects: Vec<String>,
    pub keywords: Vec<String>,
    pub raw_text: String,
}

/// Structured job posting returned by the semantic-extraction service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobRequirements {
    pub title: String,
    pub company: String,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub experience_level: String,
    pub education_requirements: String,
    pub responsibilities: Vec<String>,
    pub qualifications: Vec<String>,
    pub keywords: Vec<String>,
    pub raw_text: String,
}

/// Binary readiness label derived from the overall score.
///
/// The pairing is a contract downstream consumers rely on: `Ready` iff
/// `overall_score >= 90.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReadinessStatus {
    Ready,
    #[default]
    NeedsImprovement,
}

impl ReadinessStatus {
    /// The score threshold at which a resume is considered ATS-ready.
    pub const READY_THRESHOLD: f64 = 90.0;

    pub fn from_score(overall_score: f64) -> Self {
        if overall_score >= Self::READY_THRESHOLD {
            Self::Ready
        } else {
            Self::NeedsImprovement
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryScores {
    pub skills_match: f64,
    pub experience_match: f64,
    pub education_match: f64,
    pub keywords_match: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailedAnalysis {
    pub skills_analysis: String,
    pub experience_analysis: String,
    pub education_analysis: String,
    pub overall_recommendation: String,
}

/// Score record with narrative rationale from the semantic-extraction
/// service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AtsAnalysis {
    pub overall_score: f64,
    pub category_scores: CategoryScores,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub missing_skills: Vec<String>,
    pub improvement_suggestions: Vec<String>,
    pub readiness_status: ReadinessStatus,
    pub detailed_analysis: DetailedAnalysis,
}

/// Result of the deterministic skill matcher.
///
/// Scores and rates are percentages in `[0, 100]`. `missing_required`
/// preserves the job's original ordering; on the empty-resume short-circuit
/// it also preserves the original casing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillMatch {
    pub overall_score: f64,
    pub matched_required: Vec<String>,
    pub matched_preferred: Vec<String>,
    pub missing_required: Vec<String>,
    pub required_match_rate: f64,
    pub preferred_match_rate: f64,
}

/// Terminal state of a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    Success,
    Error,
}

/// The single record handed back to the caller for every pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub status: AnalysisStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_data: Option<ResumeData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_data: Option<JobRequirements>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ats_analysis: Option<AtsAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_match: Option<SkillMatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_similarity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub improvement_plan: Option<Value>,
    pub processed_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl AnalysisReport {
    /// Builds the terminal `error` record for a failed run.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: AnalysisStatus::Error,
            resume_data: None,
            job_data: None,
            ats_analysis: None,
            skill_match: None,
            text_similarity: None,
            improvement_plan: None,
            processed_at: Utc::now(),
            error_message: Some(message.into()),
        }
    }
}
