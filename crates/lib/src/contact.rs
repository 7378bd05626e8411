//! # Contact Extraction
//!
//! Regex-based recognition of contact identifiers in raw resume text. This
//! runs over the raw (pre-normalization) text: normalization strips the `/`
//! in profile URLs and folds case, both of which these patterns rely on.

use crate::errors::ConfigError;
use crate::types::ContactInfo;
use regex::Regex;

/// Locates email, phone, LinkedIn and GitHub identifiers in free text.
///
/// The four searches are independent and the first occurrence in the text
/// wins per field; a field with no match stays an empty string.
#[derive(Debug, Clone)]
pub struct ContactExtractor {
    email: Regex,
    phone: Regex,
    linkedin: Regex,
    github: Regex,
}

impl ContactExtractor {
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            email: Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")?,
            // North-American layout: optional country code, optional
            // parenthesized area code, space/dot/hyphen separators.
            phone: Regex::new(r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}")?,
            linkedin: Regex::new(r"(?i)linkedin\.com/in/[\w\-]+")?,
            github: Regex::new(r"(?i)github\.com/[\w\-]+")?,
        })
    }

    pub fn extract(&self, text: &str) -> ContactInfo {
        let first = |re: &Regex| {
            re.find(text)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        };

        // Profile handles are reported as full https URLs regardless of how
        // the resume spelled them.
        let with_scheme = |m: String| {
            if m.is_empty() {
                m
            } else {
                format!("https://{m}")
            }
        };

        ContactInfo {
            email: first(&self.email),
            phone: first(&self.phone),
            linkedin: with_scheme(first(&self.linkedin)),
            github: with_scheme(first(&self.github)),
        }
    }
}
