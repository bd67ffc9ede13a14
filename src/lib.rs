// src/lib.rs
pub mod cli;
pub mod core;
pub mod models;

pub use cli::{Args, MissingFile, run};
pub use crate::core::chart::{DEFAULT_CHART_ROWS, print_freqs, render_chart};
pub use crate::core::frequency::{get_freqs, word_frequencies};
pub use crate::core::source::read_contents;
pub use crate::core::stop_words::{
    DEFAULT_STOP_WORDS, StopWords, StopWordsConfig, load_stop_words, remove_stop_words,
};
pub use crate::core::text::extract_words;
pub use models::{Ranking, WordCount};
