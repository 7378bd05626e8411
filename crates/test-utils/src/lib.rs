//! # atsrank-test-utils
//!
//! Shared test helpers: a programmable mock of the semantic-extraction
//! service and, behind the `pdf` feature, a generator for real PDF fixtures.

use async_trait::async_trait;
use atsrank::errors::PromptError;
use atsrank::providers::ai::AiProvider;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

// --- Mock AI Provider ---

/// A mock semantic-extraction service for pipeline tests.
///
/// Responses are programmed per call kind by keying on a unique substring of
/// the system prompt; every call is recorded for assertions.
#[derive(Clone, Debug)]
pub struct MockAiProvider {
    responses: Arc<Mutex<HashMap<String, String>>>,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockAiProvider {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Pre-programs a response. The key should be a unique substring of the
    /// system prompt of the call being mocked.
    pub fn add_response(&self, key: &str, response: &str) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(key.to_string(), response.to_string());
    }

    /// Retrieves the recorded (system_prompt, user_prompt) calls.
    pub fn get_calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockAiProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, PromptError> {
        let mut calls = self.calls.lock().unwrap();
        calls.push((system_prompt.to_string(), user_prompt.to_string()));

        let responses = self.responses.lock().unwrap();
        for (key, response) in responses.iter() {
            if system_prompt.contains(key) {
                return Ok(response.clone());
            }
        }

        Err(PromptError::AiApi(format!(
            "MockAiProvider: No response programmed for system prompt. Got: '{system_prompt}'"
        )))
    }
}

// --- Test-Specific Helpers ---
#[cfg(feature = "pdf")]
pub mod helpers {
    use anyhow::Result;
    use printpdf::{
        BuiltinFont, Layer, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, Pt, TextItem,
        TextMatrix, TextRenderingMode,
    };

    /// Generates a simple, single-page PDF carrying the given text content,
    /// compatible with printpdf v0.8.2.
    pub fn generate_test_pdf(text: &str) -> Result<Vec<u8>> {
        let mut doc = PdfDocument::new("Fixture PDF");
        let mut page = PdfPage::new(Mm(210.0), Mm(297.0), vec![]);
        let layer_def = Layer::new("Layer 1");
        let layer_id = doc.add_layer(&layer_def);

        // Use a built-in Type1 font so text is stored with a standard
        // encoding that extractors can map back to characters; embedded
        // subset fonts are written as raw glyph IDs.
        let ops = vec![
            Op::BeginLayer {
                layer_id: layer_id.clone(),
            },
            Op::SetFontSizeBuiltinFont {
                size: Pt(12.0),
                font: BuiltinFont::Helvetica,
            },
            Op::StartTextSection,
            Op::SetTextMatrix {
                matrix: TextMatrix::Translate(Mm(10.0).into(), Mm(280.0).into()),
            },
            Op::SetTextRenderingMode {
                mode: TextRenderingMode::Fill,
            },
            Op::WriteTextBuiltinFont {
                items: vec![TextItem::Text(text.to_string())],
                font: BuiltinFont::Helvetica,
            },
            Op::EndTextSection,
            Op::EndLayer { layer_id },
        ];

        page.ops = ops;
        doc.pages.push(page);

        let mut warnings = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            eprintln!("PDF generation warnings: {warnings:?}");
        }

        Ok(bytes)
    }
}
