use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Shortest token considered a vocabulary word.
pub const MIN_WORD_LEN: usize = 5;

static WORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\b[a-zA-Z]{{{},}}\b", MIN_WORD_LEN)).expect("static regex compile")
});

/// Returns the distinct lowercase words of 5+ ASCII letters in first-seen order.
pub fn extract_words(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    WORD_RE
        .find_iter(text)
        .map(|m| m.as_str().to_ascii_lowercase())
        .filter(|w| seen.insert(w.clone()))
        .collect()
}
