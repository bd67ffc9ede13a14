// tests/integration_tests/stop_words_config_test.rs
use super::common::create_test_file;
use anyhow::Result;
use tempfile::TempDir;
use wordfreq::{DEFAULT_STOP_WORDS, StopWords, load_stop_words, word_frequencies};

#[test]
fn test_custom_stop_words_replace_defaults() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = create_test_file(temp_dir.path(), "stop.toml", "words = [\"cat\"]\n")?;
    let stop_words = load_stop_words(&path)?;

    let ranking = word_frequencies("The cat and the dog", &stop_words);
    assert_eq!(ranking.count_of("cat"), None);
    assert_eq!(ranking.count_of("the"), Some(2), "Default stop words no longer apply");
    assert_eq!(ranking.count_of("dog"), Some(1));
    Ok(())
}

#[test]
fn test_default_list_matches_constant() {
    let stop_words = StopWords::default();
    assert_eq!(stop_words.len(), DEFAULT_STOP_WORDS.len());
    assert!(DEFAULT_STOP_WORDS.iter().all(|word| stop_words.contains(word)));
}
