// src/core/text.rs

/// An em-dash whose UTF-8 bytes were decoded as Windows-1252 somewhere upstream.
pub const MOJIBAKE_EM_DASH: &str = "\u{e2}\u{20ac}\u{201d}";

pub const EM_DASH: char = '\u{2014}';

/// Splits raw text into lowercase, punctuation-free words.
///
/// Newlines become two spaces and em-dashes (real or mis-decoded) become one space.
/// Then ASCII punctuation is removed, the text is lowercased and split on single spaces.
/// Empty pieces are dropped. Only `' '` separates words: a tab or `\r` stays inside
/// the token it touches.
///
/// # Examples
///
/// ```
/// use wordfreq::extract_words;
///
/// assert_eq!(extract_words("Hello, World!!\nhello"), vec!["hello", "world", "hello"]);
/// ```
#[must_use]
pub fn extract_words(text: &str) -> Vec<String> {
    let text = expand_newlines(text);
    let text = replace_em_dashes(&text);
    let text = strip_punctuation(&text);
    let text = text.to_lowercase();
    split_words(&text)
}

fn expand_newlines(text: &str) -> String {
    text.replace('\n', "  ")
}

fn replace_em_dashes(text: &str) -> String {
    text.replace(MOJIBAKE_EM_DASH, " ").replace(EM_DASH, " ")
}

pub(crate) fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

fn split_words(text: &str) -> Vec<String> {
    text.split(' ')
        .filter(|word| !word.is_empty())
        .map(str::to_owned)
        .collect()
}
