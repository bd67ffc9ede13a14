// tests/integration_tests/chart_test.rs
use super::common::SAMPLE_TEXT;
use anyhow::Result;
use wordfreq::{DEFAULT_CHART_ROWS, StopWords, render_chart, word_frequencies};

#[test]
fn test_chart_from_text() -> Result<()> {
    let ranking = word_frequencies(SAMPLE_TEXT, &StopWords::default());
    let chart = render_chart(&ranking, DEFAULT_CHART_ROWS)?;

    let lines: Vec<&str> = chart.lines().collect();
    assert_eq!(lines.len(), 9, "Should draw nine rows by default");
    assert!(lines[0].trim_start().starts_with("these | "));

    let widths: Vec<usize> = lines
        .iter()
        .map(|line| line.find(" | ").expect("every row has a separator"))
        .collect();
    assert!(
        widths.windows(2).all(|pair| pair[0] == pair[1]),
        "Separators should line up: {chart}"
    );
    Ok(())
}

#[test]
fn test_bar_length_matches_count() -> Result<()> {
    let ranking = word_frequencies("red red red blue blue green", &StopWords::default());
    let chart = render_chart(&ranking, DEFAULT_CHART_ROWS)?;

    for (line, entry) in chart.lines().zip(&ranking) {
        let bar = line.rsplit(' ').next().unwrap_or_default();
        assert_eq!(bar.len(), entry.count, "Bar for '{}' should match its count", entry.word);
    }
    Ok(())
}

#[test]
fn test_empty_text_cannot_be_charted() {
    let ranking = word_frequencies("", &StopWords::default());
    assert!(render_chart(&ranking, DEFAULT_CHART_ROWS).is_err());
}
