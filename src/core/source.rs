// src/core/source.rs
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;

/// Reads a whole text file into one string.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be opened
/// * The file is not valid UTF-8
pub fn read_contents(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read text file: {}", path.display()))
}
