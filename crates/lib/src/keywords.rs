//! # Keyword Extraction
//!
//! Frequency-based salient-term extraction over normalized text. This is the
//! deterministic counterpart to the keyword lists the semantic-extraction
//! service returns, and is used by the pipeline as a cross-check and a
//! fill-in when the service leaves those lists empty.

use crate::errors::ConfigError;
use crate::text::{english_stopwords, normalize};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

/// A salient term and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub term: String,
    pub count: usize,
}

/// Configuration for [`KeywordExtractor`]. Passed in explicitly so that the
/// stopword vocabulary is pinned per component instead of living in ambient
/// global state.
#[derive(Debug, Clone)]
pub struct KeywordConfig {
    pub stopwords: HashSet<String>,
    pub min_token_len: usize,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            stopwords: english_stopwords(),
            min_token_len: 3,
        }
    }
}

/// Extracts a ranked list of salient terms from text.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    config: KeywordConfig,
    token_pattern: Regex,
}

impl KeywordExtractor {
    pub fn new(config: KeywordConfig) -> Result<Self, ConfigError> {
        let token_pattern = Regex::new(r"\w+")?;
        Ok(Self {
            config,
            token_pattern,
        })
    }

    /// Derives the `top_n` most frequent terms from `text`.
    ///
    /// The input is lowercased and normalized, then tokenized into word-like
    /// units. Tokens that are stopwords, shorter than the configured minimum,
    /// or not purely alphabetic are discarded. The result is sorted by
    /// descending frequency, ties broken by first position of occurrence in
    /// the token stream, and truncated to `top_n`. Empty input yields an
    /// empty list; this never fails.
    pub fn extract(&self, text: &str, top_n: usize) -> Vec<Keyword> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let cleaned = normalize(&text.to_lowercase());

        // (count, first occurrence index) per surviving token.
        let mut frequencies: HashMap<String, (usize, usize)> = HashMap::new();
        for (position, token) in self
            .token_pattern
            .find_iter(&cleaned)
            .map(|m| m.as_str())
            .filter(|t| self.keep_token(t))
            .enumerate()
        {
            match frequencies.entry(token.to_string()) {
                Entry::Occupied(mut e) => e.get_mut().0 += 1,
                Entry::Vacant(e) => {
                    e.insert((1, position));
                }
            }
        }

        let mut ranked: Vec<(String, (usize, usize))> = frequencies.into_iter().collect();
        ranked.sort_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_b.cmp(count_a).then(first_a.cmp(first_b))
        });
        ranked.truncate(top_n);

        ranked
            .into_iter()
            .map(|(term, (count, _))| Keyword { term, count })
            .collect()
    }

    fn keep_token(&self, token: &str) -> bool {
        token.chars().count() >= self.config.min_token_len
            && token.chars().all(|c| c.is_alphabetic())
            && !self.config.stopwords.contains(token)
    }
}
