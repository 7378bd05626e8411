//! # atsrank
//!
//! A resume-versus-job matching engine. The deterministic core (text
//! normalization, keyword extraction, contact-pattern recognition, TF-IDF
//! similarity, weighted skill matching) is computed locally and is
//! reproducible for a fixed vocabulary; structured-field extraction and
//! narrative scoring are delegated to an external semantic-extraction
//! service behind the [`providers::ai::AiProvider`] trait with a strict
//! default-on-failure contract.
//!
//! Document parsing is pluggable through the [`extract::TextExtractor`]
//! trait; the `atsrank-pdf` crate provides the PDF implementation.

pub mod contact;
pub mod errors;
pub mod extract;
pub mod keywords;
pub mod pipeline;
pub mod prompts;
pub mod providers;
pub mod semantic;
pub mod similarity;
pub mod skills;
pub mod text;
pub mod types;

pub use contact::ContactExtractor;
pub use errors::{ConfigError, PromptError};
pub use extract::{Document, ExtractError, ExtractedText, ExtractionTier, TextExtractor};
pub use keywords::{Keyword, KeywordConfig, KeywordExtractor};
pub use pipeline::{AtsPipeline, AtsPipelineBuilder, PipelineError};
pub use semantic::SemanticExtractor;
pub use similarity::{TfidfConfig, TfidfScorer};
pub use skills::match_skills;
pub use text::normalize;
pub use types::{
    AnalysisReport, AnalysisStatus, AtsAnalysis, ContactInfo, JobRequirements, ReadinessStatus,
    ResumeData, SkillMatch,
};
