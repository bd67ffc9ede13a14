// src/core.rs
pub mod chart;
pub mod frequency;
pub mod source;
pub mod stop_words;
pub mod text;

#[cfg(test)]
pub mod test_utils;
