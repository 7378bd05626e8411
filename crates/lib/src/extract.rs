//! # Document Text Extraction Interface
//!
//! The core defines the extraction contract; format-specific plugin crates
//! (e.g. `atsrank-pdf`) implement it. The pipeline only depends on this
//! trait, so new document formats or extraction strategies slot in without
//! touching the orchestrator.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An opaque binary document plus its declared media type. Consumed once by
/// a [`TextExtractor`].
#[derive(Debug, Clone)]
pub struct Document {
    pub bytes: Vec<u8>,
    pub media_type: String,
}

impl Document {
    pub fn new(bytes: Vec<u8>, media_type: impl Into<String>) -> Self {
        Self {
            bytes,
            media_type: media_type.into(),
        }
    }

    pub fn pdf(bytes: Vec<u8>) -> Self {
        Self::new(bytes, "application/pdf")
    }
}

/// Which tier of the extraction strategy list produced the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionTier {
    Primary,
    Fallback,
}

/// Plain text recovered from a document, tagged with its provenance.
/// Read-only after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedText {
    pub text: String,
    pub tier: ExtractionTier,
    /// Name of the strategy that produced the text.
    pub strategy: String,
}

/// Custom error types for document text extraction.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("no_text_extracted: every extraction strategy produced empty text")]
    NoTextExtracted,
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),
    #[error("Failed to parse document: {0}")]
    Parse(String),
}

/// A format-specific text extractor. Fatal failure here ends the pipeline
/// run with a terminal `error` result.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, document: &Document) -> Result<ExtractedText, ExtractError>;
}
