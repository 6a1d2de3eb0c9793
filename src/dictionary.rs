//! Word-list loading.
//!
//! Word lists are plain text with one word per line. Lines are trimmed, blank
//! lines and lines containing anything other than letters are skipped, and
//! every word is upper-cased. Duplicates are dropped, keeping the first
//! occurrence.

use std::fs;
use std::path::Path;

use log::debug;
use rustc_hash::FxHashSet;

use crate::error::Result;

/// Reads and normalizes a word list from disk.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let words = parse(&text);
    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Normalizes newline-separated text into a word list.
pub fn parse(text: &str) -> Vec<String> {
    normalize(text.lines())
}

/// Trims, filters, upper-cases and deduplicates words.
pub fn normalize<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = FxHashSet::default();

    words
        .into_iter()
        .filter_map(|word| {
            let word = word.as_ref().trim();
            (!word.is_empty() && word.chars().all(char::is_alphabetic))
                .then(|| word.to_uppercase())
        })
        .filter(|word| seen.insert(word.clone()))
        .collect()
}
