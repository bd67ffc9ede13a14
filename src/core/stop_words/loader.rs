// src/core/stop_words/loader.rs
use crate::core::stop_words::StopWords;
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Layout of a stop-word file:
///
/// ```toml
/// words = ["the", "and", "of"]
/// ```
#[derive(Deserialize, Debug, Default)]
pub struct StopWordsConfig {
    #[serde(default)]
    pub words: Vec<String>,
}

impl From<StopWordsConfig> for StopWords {
    fn from(config: StopWordsConfig) -> Self {
        Self::from_list(config.words.as_slice())
    }
}

/// Loads a stop-word list from a TOML file, replacing the built-in list.
///
/// # Arguments
///
/// * `path` - The TOML file to read
///
/// # Returns
///
/// * `Ok(StopWords)` holding the words from the file in token form
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read as UTF-8 text
/// * The file is not valid TOML or `words` is not a list of strings
pub fn load_stop_words(path: &Path) -> Result<StopWords> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read stop-word file: {}", path.display()))?;

    let config: StopWordsConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse stop-word file: {}", path.display()))?;

    Ok(config.into())
}
