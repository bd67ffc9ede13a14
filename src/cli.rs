// src/cli.rs
use anyhow::Result;
use clap::Parser;
use log::debug;
use std::fmt;
use std::path::PathBuf;

use crate::core::chart::{DEFAULT_CHART_ROWS, print_freqs};
use crate::core::frequency::get_freqs;
use crate::core::source::read_contents;
use crate::core::stop_words::{StopWords, load_stop_words, remove_stop_words};
use crate::core::text::extract_words;

#[derive(Parser, Debug)]
#[command(author, version, about = "Get the word frequency in a text file.", long_about = None)]
pub struct Args {
    /// File to read
    pub file: PathBuf,

    /// Number of words to show in the chart
    #[arg(short = 't', long, default_value_t = DEFAULT_CHART_ROWS)]
    pub top: usize,

    /// TOML file with a replacement stop-word list (`words = [...]`)
    #[arg(short = 's', long)]
    pub stop_words: Option<PathBuf>,
}

/// The input path does not name an existing file.
///
/// Kept apart from other failures so the binary can report it on stdout.
#[derive(Debug)]
pub struct MissingFile(pub PathBuf);

impl fmt::Display for MissingFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} does not exist!", self.0.display())
    }
}

impl std::error::Error for MissingFile {}

/// Reads the file named in `args`, ranks its words and prints the chart.
///
/// # Errors
///
/// Returns [`MissingFile`] when the path is not a file. Also fails when the
/// file or the stop-word list cannot be read, or when no words survive filtering.
pub fn run(args: Args) -> Result<()> {
    if !args.file.is_file() {
        return Err(MissingFile(args.file).into());
    }

    let stop_words = match &args.stop_words {
        Some(path) => load_stop_words(path)?,
        None => StopWords::default(),
    };
    debug!("Using {} stop words", stop_words.len());

    let text = read_contents(&args.file)?;
    debug!("Read {} bytes from {}", text.len(), args.file.display());

    let tokens = extract_words(&text);
    let total_tokens = tokens.len();
    let tokens = remove_stop_words(tokens, &stop_words);
    debug!("Kept {} of {total_tokens} words after stop-word filtering", tokens.len());

    let ranking = get_freqs(&tokens);
    debug!("Found {} distinct words", ranking.len());

    print_freqs(&ranking, args.top)
}
