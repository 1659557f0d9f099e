use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Normalize raw text before chunking.
///
/// Collapses every whitespace run (including Unicode whitespace) to a single
/// space, trims both ends and replaces curly quotes with their ASCII forms.
/// Empty or all-whitespace input yields an empty string. Applying it twice
/// gives the same result as applying it once.
#[must_use]
pub fn normalize(text: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(text, " ");
    collapsed
        .trim()
        .chars()
        .map(|c| match c {
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2018}' | '\u{2019}' => '\'',
            other => other,
        })
        .collect()
}
