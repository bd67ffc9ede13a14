// src/core/frequency.rs
use crate::core::stop_words::{StopWords, remove_stop_words};
use crate::core::text::extract_words;
use crate::models::{Ranking, WordCount};
use std::collections::HashMap;

/// Counts each distinct token and ranks them by count, highest first.
///
/// Tokens with the same count appear in the order of their first occurrence.
/// Expects tokens that have already been through [`extract_words`] and
/// [`remove_stop_words`].
#[must_use]
pub fn get_freqs(tokens: &[String]) -> Ranking {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<WordCount> = Vec::new();

    for token in tokens {
        if let Some(entry) = slots
            .get(token.as_str())
            .and_then(|&slot| entries.get_mut(slot))
        {
            entry.count = entry.count.saturating_add(1);
        } else {
            slots.insert(token, entries.len());
            entries.push(WordCount::new(token.as_str(), 1));
        }
    }

    Ranking::from_first_seen(entries)
}

/// Runs the whole pipeline on raw text: tokenize, filter, count and rank.
#[must_use]
pub fn word_frequencies(text: &str, stop_words: &StopWords) -> Ranking {
    let tokens = remove_stop_words(extract_words(text), stop_words);
    get_freqs(&tokens)
}
