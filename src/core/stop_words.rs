// src/core/stop_words.rs
mod loader;

pub use loader::{StopWordsConfig, load_stop_words};

use crate::core::text::strip_punctuation;
use std::collections::HashSet;

/// Words dropped from every frequency count unless a custom list is configured.
pub const DEFAULT_STOP_WORDS: [&str; 25] = [
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "i", "in", "is",
    "it", "its", "of", "on", "that", "the", "to", "were", "will", "with",
];

/// An immutable set of words excluded from counting.
///
/// Matching is exact against tokens, so [`StopWords::from_list`] puts each entry in
/// token form first: ASCII punctuation removed, then lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl Default for StopWords {
    fn default() -> Self {
        Self::from_list(&DEFAULT_STOP_WORDS)
    }
}

impl StopWords {
    #[must_use]
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        Self {
            words: words
                .iter()
                .map(|w| strip_punctuation(w.as_ref()).to_lowercase())
                .collect(),
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Drops every token found in `stop_words`, keeping the rest in their original order.
///
/// Expects tokens produced by [`crate::extract_words`].
#[must_use]
pub fn remove_stop_words(tokens: Vec<String>, stop_words: &StopWords) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|token| !stop_words.contains(token))
        .collect()
}
