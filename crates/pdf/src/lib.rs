//! # atsrank-pdf: PDF Text Extraction Plugin
//!
//! Implements the `TextExtractor` trait from `atsrank` for PDF documents.
//! Extraction is a fixed ordered list of strategies tried in sequence under
//! one success predicate (non-empty trimmed text): a layout-aware pass
//! first, then a simpler raw text-op pass. Two tiers, no open-ended
//! retrying; adding a strategy does not touch the pipeline.

use atsrank::extract::{Document, ExtractError, ExtractedText, ExtractionTier, TextExtractor};
use pdf::content::{Op, TextDrawAdjusted};
use pdf::file::FileOptions;
use tracing::{info, warn};

/// In TJ arrays, kerning adjustments this negative (thousandths of an em)
/// are wide enough to read as word gaps.
const WORD_GAP_THRESHOLD: f32 = -100.0;

/// One way of turning PDF bytes into text. Strategies are stateless and
/// each parses the byte slice from the start, so no rewinding is needed
/// between attempts.
pub trait ExtractionStrategy: Send + Sync {
    fn name(&self) -> &'static str;
    fn extract(&self, data: &[u8]) -> Result<String, ExtractError>;
}

/// The PDF implementation of `TextExtractor`.
pub struct PdfTextExtractor {
    strategies: Vec<Box<dyn ExtractionStrategy>>,
}

impl PdfTextExtractor {
    /// Creates the extractor with the standard two-tier strategy list.
    pub fn new() -> Self {
        Self::with_strategies(vec![
            Box::new(LayoutTextStrategy),
            Box::new(RawTextStrategy),
        ])
    }

    /// Creates the extractor with a custom strategy list. The first entry is
    /// the primary tier; every later entry reports as fallback.
    pub fn with_strategies(strategies: Vec<Box<dyn ExtractionStrategy>>) -> Self {
        Self { strategies }
    }
}

impl Default for PdfTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, document: &Document) -> Result<ExtractedText, ExtractError> {
        if document.media_type != "application/pdf" {
            return Err(ExtractError::UnsupportedMediaType(
                document.media_type.clone(),
            ));
        }

        for (index, strategy) in self.strategies.iter().enumerate() {
            match strategy.extract(&document.bytes) {
                Ok(text) if !text.trim().is_empty() => {
                    let tier = if index == 0 {
                        ExtractionTier::Primary
                    } else {
                        ExtractionTier::Fallback
                    };
                    info!(
                        "Strategy '{}' extracted {} characters ({:?} tier)",
                        strategy.name(),
                        text.len(),
                        tier
                    );
                    return Ok(ExtractedText {
                        text,
                        tier,
                        strategy: strategy.name().to_string(),
                    });
                }
                Ok(_) => {
                    warn!(
                        "Strategy '{}' produced only whitespace, trying next",
                        strategy.name()
                    );
                }
                Err(e) => {
                    warn!("Strategy '{}' failed: {e}, trying next", strategy.name());
                }
            }
        }

        Err(ExtractError::NoTextExtracted)
    }
}

/// Layout-aware extraction: follows text-positioning operators so that line
/// breaks and word gaps survive, which keeps multi-column resumes readable.
pub struct LayoutTextStrategy;

impl ExtractionStrategy for LayoutTextStrategy {
    fn name(&self) -> &'static str {
        "layout"
    }

    fn extract(&self, data: &[u8]) -> Result<String, ExtractError> {
        walk_pages(data, |op, out| match op {
            Op::TextDraw { text } => out.push_str(&text.to_string_lossy()),
            Op::TextDrawAdjusted { array } => {
                for element in array {
                    match element {
                        TextDrawAdjusted::Text(text) => out.push_str(&text.to_string_lossy()),
                        TextDrawAdjusted::Spacing(amount) => {
                            if *amount < WORD_GAP_THRESHOLD {
                                push_separator(out, ' ');
                            }
                        }
                    }
                }
            }
            Op::TextNewline => push_separator(out, '\n'),
            Op::MoveTextPosition { translation } => {
                if translation.y != 0.0 {
                    push_separator(out, '\n');
                } else {
                    push_separator(out, ' ');
                }
            }
            Op::EndText => push_separator(out, '\n'),
            _ => {}
        })
    }
}

/// Raw extraction: concatenates every plain text-draw operator and nothing
/// else. Loses layout but survives documents whose positioning operators
/// confuse the layout pass.
pub struct RawTextStrategy;

impl ExtractionStrategy for RawTextStrategy {
    fn name(&self) -> &'static str {
        "raw"
    }

    fn extract(&self, data: &[u8]) -> Result<String, ExtractError> {
        walk_pages(data, |op, out| {
            if let Op::TextDraw { text } = op {
                out.push_str(&text.to_string_lossy());
            }
        })
    }
}

/// Parses the document and feeds every content-stream operator of every
/// page to `per_op`, joining per-page text with a newline separator.
fn walk_pages<F>(data: &[u8], mut per_op: F) -> Result<String, ExtractError>
where
    F: FnMut(&Op, &mut String),
{
    let file = FileOptions::cached()
        .load(data)
        .map_err(|e| ExtractError::Parse(e.to_string()))?;
    let resolver = file.resolver();

    let mut pages_text = Vec::new();
    for page_num in 0..file.num_pages() {
        let page = file
            .get_page(page_num)
            .map_err(|e| ExtractError::Parse(e.to_string()))?;
        let mut page_text = String::new();
        if let Some(content) = &page.contents {
            let operations = content
                .operations(&resolver)
                .map_err(|e| ExtractError::Parse(e.to_string()))?;
            for op in operations.iter() {
                per_op(op, &mut page_text);
            }
        }
        pages_text.push(page_text);
    }

    Ok(pages_text.join("\n"))
}

/// Appends a separator unless the text already ends with one, keeping the
/// output free of runs the normalizer would have to collapse anyway.
fn push_separator(out: &mut String, separator: char) {
    match out.chars().last() {
        None => {}
        Some(c) if c == separator => {}
        _ => out.push(separator),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedStrategy {
        name: &'static str,
        output: Result<&'static str, ()>,
    }

    impl ExtractionStrategy for FixedStrategy {
        fn name(&self) -> &'static str {
            self.name
        }

        fn extract(&self, _data: &[u8]) -> Result<String, ExtractError> {
            self.output
                .map(str::to_string)
                .map_err(|_| ExtractError::Parse("simulated parse failure".to_string()))
        }
    }

    fn doc() -> Document {
        Document::pdf(b"%PDF-1.4".to_vec())
    }

    #[test]
    fn whitespace_only_primary_falls_back() {
        let extractor = PdfTextExtractor::with_strategies(vec![
            Box::new(FixedStrategy {
                name: "blank",
                output: Ok("  \n\t "),
            }),
            Box::new(FixedStrategy {
                name: "recovery",
                output: Ok("Jane Doe, Software Engineer"),
            }),
        ]);

        let extracted = extractor.extract(&doc()).unwrap();
        assert_eq!(extracted.text, "Jane Doe, Software Engineer");
        assert_eq!(extracted.tier, ExtractionTier::Fallback);
        assert_eq!(extracted.strategy, "recovery");
    }

    #[test]
    fn failing_primary_falls_back() {
        let extractor = PdfTextExtractor::with_strategies(vec![
            Box::new(FixedStrategy {
                name: "broken",
                output: Err(()),
            }),
            Box::new(FixedStrategy {
                name: "recovery",
                output: Ok("recovered text"),
            }),
        ]);

        let extracted = extractor.extract(&doc()).unwrap();
        assert_eq!(extracted.tier, ExtractionTier::Fallback);
    }

    #[test]
    fn successful_primary_reports_primary_tier() {
        let extractor = PdfTextExtractor::with_strategies(vec![
            Box::new(FixedStrategy {
                name: "first",
                output: Ok("primary text"),
            }),
            Box::new(FixedStrategy {
                name: "second",
                output: Ok("unreachable"),
            }),
        ]);

        let extracted = extractor.extract(&doc()).unwrap();
        assert_eq!(extracted.text, "primary text");
        assert_eq!(extracted.tier, ExtractionTier::Primary);
        assert_eq!(extracted.strategy, "first");
    }

    #[test]
    fn all_strategies_empty_is_no_text_extracted() {
        let extractor = PdfTextExtractor::with_strategies(vec![
            Box::new(FixedStrategy {
                name: "blank",
                output: Ok(""),
            }),
            Box::new(FixedStrategy {
                name: "also-blank",
                output: Ok("   "),
            }),
        ]);

        let err = extractor.extract(&doc()).unwrap_err();
        assert!(matches!(err, ExtractError::NoTextExtracted));
        assert!(err.to_string().contains("no_text_extracted"));
    }

    #[test]
    fn non_pdf_media_type_is_rejected() {
        let extractor = PdfTextExtractor::new();
        let document = Document::new(b"plain".to_vec(), "text/plain");
        let err = extractor.extract(&document).unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedMediaType(_)));
    }

    #[test]
    fn push_separator_collapses_repeats() {
        let mut s = String::from("line");
        push_separator(&mut s, '\n');
        push_separator(&mut s, '\n');
        assert_eq!(s, "line\n");

        let mut empty = String::new();
        push_separator(&mut empty, ' ');
        assert_eq!(empty, "");
    }
}
