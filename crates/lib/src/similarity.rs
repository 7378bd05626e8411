//! # Text Similarity
//!
//! TF-IDF cosine similarity between two text blocks. The vector space is
//! rebuilt per call over exactly the two inputs, so IDF weighting is
//! call-local: scores are comparable within a call, not globally calibrated
//! across calls. That is an accepted property of the design, not a defect.

use crate::errors::ConfigError;
use crate::text::english_stopwords;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Configuration for [`TfidfScorer`].
#[derive(Debug, Clone)]
pub struct TfidfConfig {
    pub stopwords: HashSet<String>,
    /// Vocabulary cap. When the two documents contain more distinct terms,
    /// the most frequent across the corpus are kept.
    pub max_features: usize,
}

impl Default for TfidfConfig {
    fn default() -> Self {
        Self {
            stopwords: english_stopwords(),
            max_features: 1000,
        }
    }
}

/// Scores the closeness of two texts in a term-frequency vector space.
#[derive(Debug, Clone)]
pub struct TfidfScorer {
    config: TfidfConfig,
    token_pattern: Regex,
}

impl TfidfScorer {
    pub fn new(config: TfidfConfig) -> Result<Self, ConfigError> {
        // Two-or-more word characters, the classic vectorizer token shape.
        let token_pattern = Regex::new(r"\w\w+")?;
        Ok(Self {
            config,
            token_pattern,
        })
    }

    /// Returns the cosine similarity of `text_a` and `text_b` in `[0, 1]`.
    ///
    /// If either text is empty after trimming the score is `0.0` without
    /// touching the vector model, which is undefined over an empty corpus.
    pub fn score(&self, text_a: &str, text_b: &str) -> f64 {
        if text_a.trim().is_empty() || text_b.trim().is_empty() {
            return 0.0;
        }

        let counts_a = self.term_counts(text_a);
        let counts_b = self.term_counts(text_b);
        let vocabulary = self.build_vocabulary(&counts_a, &counts_b);
        if vocabulary.is_empty() {
            return 0.0;
        }

        // Smoothed IDF over the two-document corpus. The cosine divides
        // the dot product by both vector norms below.
        let n_docs = 2.0_f64;
        let mut vec_a = Vec::with_capacity(vocabulary.len());
        let mut vec_b = Vec::with_capacity(vocabulary.len());
        for term in &vocabulary {
            let tf_a = *counts_a.get(term).unwrap_or(&0) as f64;
            let tf_b = *counts_b.get(term).unwrap_or(&0) as f64;
            let df = (tf_a > 0.0) as u32 + (tf_b > 0.0) as u32;
            let idf = ((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0;
            vec_a.push(tf_a * idf);
            vec_b.push(tf_b * idf);
        }

        let norm_a = vec_a.iter().map(|v| v * v).sum::<f64>().sqrt();
        let norm_b = vec_b.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        let dot: f64 = vec_a.iter().zip(&vec_b).map(|(a, b)| a * b).sum();
        (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
    }

    fn term_counts(&self, text: &str) -> HashMap<String, usize> {
        let lowered = text.to_lowercase();
        let mut counts = HashMap::new();
        for token in self.token_pattern.find_iter(&lowered).map(|m| m.as_str()) {
            if self.config.stopwords.contains(token) {
                continue;
            }
            *counts.entry(token.to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Merges the two documents' terms, keeping at most `max_features` of
    /// them ranked by total corpus frequency (ties alphabetical, for a
    /// deterministic cap).
    fn build_vocabulary(
        &self,
        counts_a: &HashMap<String, usize>,
        counts_b: &HashMap<String, usize>,
    ) -> Vec<String> {
        let mut totals: HashMap<&str, usize> = HashMap::new();
        for (term, count) in counts_a.iter().chain(counts_b.iter()) {
            *totals.entry(term.as_str()).or_insert(0) += count;
        }

        let mut terms: Vec<(&str, usize)> = totals.into_iter().collect();
        terms.sort_by(|(term_a, count_a), (term_b, count_b)| {
            count_b.cmp(count_a).then(term_a.cmp(term_b))
        });
        terms.truncate(self.config.max_features);

        terms.into_iter().map(|(term, _)| term.to_string()).collect()
    }
}
