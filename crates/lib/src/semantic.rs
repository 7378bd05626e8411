//! # Semantic Extraction Boundary
//!
//! The wrapper around the external semantic-extraction service. Its behavior
//! is opaque and non-deterministic, so the contract enforced here is strict:
//! structuring calls never fail past this module. Provider errors and
//! unparseable output degrade to the documented empty/default structures so
//! the deterministic pipeline can continue with degraded data instead of
//! aborting.

use crate::{
    prompts,
    providers::ai::AiProvider,
    types::{AtsAnalysis, JobRequirements, ReadinessStatus, ResumeData},
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, warn};

/// Client for the four semantic-extraction operations the pipeline needs.
#[derive(Clone, Debug)]
pub struct SemanticExtractor {
    ai_provider: Arc<dyn AiProvider>,
}

impl SemanticExtractor {
    pub fn new(ai_provider: Arc<dyn AiProvider>) -> Self {
        Self { ai_provider }
    }

    /// Structures raw resume text. Returns the empty structure on any
    /// provider or parse failure.
    pub async fn extract_resume_structure(&self, raw_text: &str) -> ResumeData {
        let user_prompt = prompts::RESUME_EXTRACTION_USER_PROMPT.replace("{resume_text}", raw_text);
        self.generate_structured(
            prompts::RESUME_EXTRACTION_SYSTEM_PROMPT,
            &user_prompt,
            "resume structuring",
        )
        .await
        .unwrap_or_default()
    }

    /// Structures a raw job description. Returns the empty structure on any
    /// provider or parse failure.
    pub async fn extract_job_structure(&self, raw_text: &str) -> JobRequirements {
        let user_prompt = prompts::JOB_EXTRACTION_USER_PROMPT.replace("{job_description}", raw_text);
        self.generate_structured(
            prompts::JOB_EXTRACTION_SYSTEM_PROMPT,
            &user_prompt,
            "job structuring",
        )
        .await
        .unwrap_or_default()
    }

    /// Scores the resume against the job with a narrative rationale.
    ///
    /// On failure this returns the default zero-score analysis. Whatever the
    /// model answered, `readiness_status` is re-derived from `overall_score`
    /// so the `READY` iff `score >= 90` contract always holds.
    pub async fn score_with_rationale(
        &self,
        resume_data: &ResumeData,
        job_data: &JobRequirements,
    ) -> AtsAnalysis {
        let user_prompt = prompts::ATS_SCORING_USER_PROMPT
            .replace(
                "{resume_data}",
                &serde_json::to_string_pretty(resume_data).unwrap_or_default(),
            )
            .replace(
                "{job_data}",
                &serde_json::to_string_pretty(job_data).unwrap_or_default(),
            );

        let mut analysis: AtsAnalysis = self
            .generate_structured(prompts::ATS_SCORING_SYSTEM_PROMPT, &user_prompt, "scoring")
            .await
            .unwrap_or_default();

        analysis.readiness_status = ReadinessStatus::from_score(analysis.overall_score);
        analysis
    }

    /// Generates an improvement plan for a below-threshold score. Failures
    /// yield an error-marker object instead of propagating.
    pub async fn generate_improvement_plan(
        &self,
        analysis: &AtsAnalysis,
        missing_skills: &[String],
    ) -> Value {
        let user_prompt = prompts::IMPROVEMENT_PLAN_USER_PROMPT
            .replace(
                "{ats_analysis}",
                &serde_json::to_string_pretty(analysis).unwrap_or_default(),
            )
            .replace(
                "{missing_skills}",
                &serde_json::to_string(missing_skills).unwrap_or_default(),
            );

        self.generate_structured(
            prompts::IMPROVEMENT_PLAN_SYSTEM_PROMPT,
            &user_prompt,
            "improvement planning",
        )
        .await
        .unwrap_or_else(|| json!({ "error": "Failed to generate improvement plan" }))
    }

    /// One provider call plus JSON extraction. Returns `None` on any
    /// failure, after logging it; the caller substitutes its default.
    async fn generate_structured<T: DeserializeOwned>(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        stage: &str,
    ) -> Option<T> {
        let response = match self.ai_provider.generate(system_prompt, user_prompt).await {
            Ok(response) => response,
            Err(e) => {
                warn!("AI provider call failed during {stage}: {e}. Using default structure.");
                return None;
            }
        };

        debug!("Raw {stage} response: {response}");
        let cleaned = strip_code_fence(&response);
        match serde_json::from_str(cleaned) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                warn!(
                    "Failed to parse {stage} response as JSON: {e}. Raw response: '{cleaned}'. Using default structure."
                );
                None
            }
        }
    }
}

/// Strips a Markdown code fence (```json ... ``` or ``` ... ```) that models
/// often wrap JSON payloads in.
fn strip_code_fence(response: &str) -> &str {
    let trimmed = response.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|s| s.strip_suffix("```"))
        .map(str::trim)
        .unwrap_or(trimmed)
}
