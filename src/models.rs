// src/models.rs
mod ranking;
mod word_count;

pub use ranking::Ranking;
pub use word_count::WordCount;
