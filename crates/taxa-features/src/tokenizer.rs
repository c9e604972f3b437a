//! Lowercase alphanumeric tokenizer and n-gram construction.

use std::collections::HashSet;

/// Tokenize text into lowercase alphanumeric terms, dropping stop words
/// and single-character fragments.
pub fn tokenize(text: &str, stop_words: &HashSet<String>) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric() && c != '_')
        .map(|s| s.to_lowercase())
        .filter(|s| s.len() >= 2 && !stop_words.contains(s))
        .collect()
}

/// Build n-grams (space-joined) for every length in `min..=max`.
pub fn ngrams(tokens: &[String], min: usize, max: usize) -> Vec<String> {
    let mut out = Vec::new();
    for n in min..=max {
        if n == 0 || tokens.len() < n {
            continue;
        }
        for window in tokens.windows(n) {
            out.push(window.join(" "));
        }
    }
    out
}
