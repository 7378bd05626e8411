//! # Matching Pipeline
//!
//! The orchestrator that sequences extraction, semantic structuring,
//! deterministic enrichment, and scoring into one run. Each run is
//! independent, ends in exactly one of two terminal states (`success` or
//! `error`), and never lets a failure escape past [`AtsPipeline::process`].

use crate::{
    contact::ContactExtractor,
    errors::ConfigError,
    extract::{Document, ExtractError, TextExtractor},
    keywords::{KeywordConfig, KeywordExtractor},
    providers::ai::AiProvider,
    semantic::SemanticExtractor,
    similarity::{TfidfConfig, TfidfScorer},
    skills::match_skills,
    types::{AnalysisReport, AnalysisStatus, JobRequirements, ReadinessStatus, ResumeData},
};
use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

/// How many keywords the enrichment cross-check derives per text.
const ENRICHMENT_KEYWORD_TOP_N: usize = 20;

/// Custom error types for the matching pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Text extraction failed: {0}")]
    Extraction(#[from] ExtractError),
    #[error("Pipeline is not fully configured: {0}")]
    Builder(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A builder for [`AtsPipeline`] instances.
///
/// The AI provider and the text extractor are required; the deterministic
/// components fall back to their default configurations (fixed English
/// stopwords, 1000-feature vector space) when not overridden.
#[derive(Default)]
pub struct AtsPipelineBuilder {
    ai_provider: Option<Arc<dyn AiProvider>>,
    extractor: Option<Arc<dyn TextExtractor>>,
    keyword_config: Option<KeywordConfig>,
    tfidf_config: Option<TfidfConfig>,
}

impl AtsPipelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ai_provider(mut self, ai_provider: Arc<dyn AiProvider>) -> Self {
        self.ai_provider = Some(ai_provider);
        self
    }

    pub fn extractor(mut self, extractor: Arc<dyn TextExtractor>) -> Self {
        self.extractor = Some(extractor);
        self
    }

    pub fn keyword_config(mut self, config: KeywordConfig) -> Self {
        self.keyword_config = Some(config);
        self
    }

    pub fn tfidf_config(mut self, config: TfidfConfig) -> Self {
        self.tfidf_config = Some(config);
        self
    }

    pub fn build(self) -> Result<AtsPipeline, PipelineError> {
        let ai_provider = self
            .ai_provider
            .ok_or_else(|| PipelineError::Builder("an AI provider is required".to_string()))?;
        let extractor = self
            .extractor
            .ok_or_else(|| PipelineError::Builder("a text extractor is required".to_string()))?;

        Ok(AtsPipeline {
            semantic: SemanticExtractor::new(ai_provider),
            extractor,
            keywords: KeywordExtractor::new(self.keyword_config.unwrap_or_default())?,
            contact: ContactExtractor::new()?,
            similarity: TfidfScorer::new(self.tfidf_config.unwrap_or_default())?,
        })
    }
}

/// The complete resume-versus-job analysis pipeline.
pub struct AtsPipeline {
    semantic: SemanticExtractor,
    extractor: Arc<dyn TextExtractor>,
    keywords: KeywordExtractor,
    contact: ContactExtractor,
    similarity: TfidfScorer,
}

impl AtsPipeline {
    /// Runs the full analysis for one document/job-description pair.
    ///
    /// This is the single caller-facing entry point and it never fails: any
    /// internal error is converted into a terminal `error` report carrying a
    /// human-readable message.
    pub async fn process(&self, document: &Document, job_description: &str) -> AnalysisReport {
        match self.run(document, job_description).await {
            Ok(report) => report,
            Err(e) => {
                error!("Pipeline run failed: {e}");
                AnalysisReport::error(e.to_string())
            }
        }
    }

    async fn run(
        &self,
        document: &Document,
        job_description: &str,
    ) -> Result<AnalysisReport, PipelineError> {
        info!("Extracting text from document ({})", document.media_type);
        let extracted = self.extractor.extract(document)?;
        info!(
            "Extracted {} characters via {:?} strategy '{}'",
            extracted.text.len(),
            extracted.tier,
            extracted.strategy
        );

        info!("Structuring resume text via semantic-extraction service");
        let mut resume_data = self.semantic.extract_resume_structure(&extracted.text).await;
        resume_data.raw_text = extracted.text;

        info!("Structuring job description via semantic-extraction service");
        let mut job_data = self.semantic.extract_job_structure(job_description).await;
        job_data.raw_text = job_description.to_string();

        self.enrich_profiles(&mut resume_data, &mut job_data);

        let skill_match = match_skills(
            &resume_data.skills,
            &job_data.required_skills,
            &job_data.preferred_skills,
        );
        let text_similarity = self
            .similarity
            .score(&resume_data.raw_text, &job_data.raw_text);
        info!(
            "Skill match score: {:.1}, supplementary text similarity: {:.3}",
            skill_match.overall_score, text_similarity
        );

        info!("Scoring resume against job requirements");
        let ats_analysis = self.semantic.score_with_rationale(&resume_data, &job_data).await;

        let improvement_plan = if ats_analysis.overall_score < ReadinessStatus::READY_THRESHOLD {
            info!(
                "Overall score {:.1} is below the readiness threshold, generating improvement plan",
                ats_analysis.overall_score
            );
            Some(
                self.semantic
                    .generate_improvement_plan(&ats_analysis, &ats_analysis.missing_skills)
                    .await,
            )
        } else {
            None
        };

        Ok(AnalysisReport {
            status: AnalysisStatus::Success,
            resume_data: Some(resume_data),
            job_data: Some(job_data),
            ats_analysis: Some(ats_analysis),
            skill_match: Some(skill_match),
            text_similarity: Some(text_similarity),
            improvement_plan,
            processed_at: Utc::now(),
            error_message: None,
        })
    }

    /// Cross-checks the structured profiles against the deterministic
    /// extractors, filling fields the service left empty. Model output is
    /// never overwritten, only supplemented.
    fn enrich_profiles(&self, resume_data: &mut ResumeData, job_data: &mut JobRequirements) {
        if resume_data.keywords.is_empty() {
            resume_data.keywords = self
                .keywords
                .extract(&resume_data.raw_text, ENRICHMENT_KEYWORD_TOP_N)
                .into_iter()
                .map(|k| k.term)
                .collect();
        }
        if job_data.keywords.is_empty() {
            job_data.keywords = self
                .keywords
                .extract(&job_data.raw_text, ENRICHMENT_KEYWORD_TOP_N)
                .into_iter()
                .map(|k| k.term)
                .collect();
        }

        let contact = self.contact.extract(&resume_data.raw_text);
        let info = &mut resume_data.personal_info;
        if info.email.is_empty() {
            info.email = contact.email;
        }
        if info.phone.is_empty() {
            info.phone = contact.phone;
        }
        if info.linkedin.is_empty() {
            info.linkedin = contact.linkedin;
        }
        if info.github.is_empty() {
            info.github = contact.github;
        }
    }
}
