// src/core/chart.rs
use crate::models::Ranking;
use anyhow::{Result, bail};
use std::fmt::Write as _;

/// Rows drawn when no `--top` is given: ranks 1 through 9.
pub const DEFAULT_CHART_ROWS: usize = 9;

/// Renders the first `rows` entries of `ranking` as a bar chart, one line per word.
///
/// Each line right-aligns `"<word> | "` in a column four wider than the longest shown
/// word, then the count padded to two characters, a space and one `*` per occurrence:
///
/// ```text
///    her | 33 *********************************
///  which | 12 ************
/// ```
///
/// A ranking shorter than `rows` renders only the entries it has.
///
/// # Errors
///
/// Returns an error if there is nothing to draw: the ranking is empty or `rows` is zero.
pub fn render_chart(ranking: &Ranking, rows: usize) -> Result<String> {
    let shown = ranking.top(rows);
    if shown.is_empty() {
        bail!("insufficient data to render chart");
    }

    let longest_word_len = shown.iter().map(|e| e.label_len()).max().unwrap_or(0);
    let width = longest_word_len.saturating_add(4);

    let mut chart = String::new();
    for entry in shown {
        let label = format!("{} | ", entry.word);
        writeln!(
            chart,
            "{label:>width$}{count:>2} {bar}",
            count = entry.count,
            bar = "*".repeat(entry.count)
        )?;
    }
    Ok(chart)
}

/// Prints the chart from [`render_chart`] to standard output.
///
/// # Errors
///
/// Fails under the same conditions as [`render_chart`]; nothing is printed then.
pub fn print_freqs(ranking: &Ranking, rows: usize) -> Result<()> {
    let chart = render_chart(ranking, rows)?;
    print!("{chart}");
    Ok(())
}
