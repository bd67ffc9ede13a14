// src/models/word_count.rs

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

impl WordCount {
    #[inline]
    #[must_use]
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }

    /// Width of the word in characters, as it occupies a chart column.
    #[inline]
    #[must_use]
    pub fn label_len(&self) -> usize {
        self.word.chars().count()
    }
}

impl From<(&str, usize)> for WordCount {
    fn from((word, count): (&str, usize)) -> Self {
        Self::new(word, count)
    }
}
