//! # PDF Extraction Integration Tests
//!
//! These run the real strategy list against PDFs generated with `printpdf`.

use anyhow::Result;
use atsrank::extract::{Document, ExtractError, ExtractionTier, TextExtractor};
use atsrank_pdf::PdfTextExtractor;
use atsrank_test_utils::helpers::generate_test_pdf;

#[test]
fn extracts_text_from_a_real_pdf() -> Result<()> {
    let pdf_data = generate_test_pdf("Jane Doe Senior Rust Developer")?;
    let extractor = PdfTextExtractor::new();

    let extracted = extractor.extract(&Document::pdf(pdf_data))?;

    assert!(
        extracted.text.contains("Jane Doe Senior Rust Developer"),
        "extracted: {:?}",
        extracted.text
    );
    assert_eq!(extracted.tier, ExtractionTier::Primary);
    assert_eq!(extracted.strategy, "layout");
    Ok(())
}

#[test]
fn garbage_bytes_fail_with_no_text_extracted() {
    let extractor = PdfTextExtractor::new();
    let err = extractor
        .extract(&Document::pdf(b"not a pdf at all".to_vec()))
        .unwrap_err();

    // Both strategies fail to parse, so the uniform predicate reports the
    // exhausted strategy list rather than a parse error.
    assert!(matches!(err, ExtractError::NoTextExtracted));
}

#[test]
fn empty_page_pdf_fails_with_no_text_extracted() -> Result<()> {
    let pdf_data = generate_test_pdf("")?;
    let extractor = PdfTextExtractor::new();

    let err = extractor.extract(&Document::pdf(pdf_data)).unwrap_err();
    assert!(matches!(err, ExtractError::NoTextExtracted));
    Ok(())
}
