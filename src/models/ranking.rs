// src/models/ranking.rs
use crate::models::WordCount;

/// Word counts ordered by count, highest first.
///
/// Equal counts keep the order in which the words were first seen. A `Ranking` is
/// built once by [`crate::get_freqs`] and is read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ranking {
    entries: Vec<WordCount>,
}

impl Ranking {
    /// Sorts `entries` by descending count.
    ///
    /// The sort is stable, so entries with equal counts stay in the order they were given.
    #[must_use]
    pub fn from_first_seen(mut entries: Vec<WordCount>) -> Self {
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        Self { entries }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, WordCount> {
        self.entries.iter()
    }

    /// The first `n` entries, or all of them when fewer are available.
    #[must_use]
    pub fn top(&self, n: usize) -> &[WordCount] {
        self.entries.get(..n).unwrap_or(&self.entries)
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries
            .iter()
            .fold(0_usize, |acc, entry| acc.saturating_add(entry.count))
    }

    #[must_use]
    pub fn count_of(&self, word: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| entry.word == word)
            .map(|entry| entry.count)
    }
}

impl<'a> IntoIterator for &'a Ranking {
    type Item = &'a WordCount;
    type IntoIter = std::slice::Iter<'a, WordCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
