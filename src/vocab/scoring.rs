use std::cmp::Ordering;

use super::extract::extract_words;
use super::frequency::PopularityIndex;
use crate::core::models::WordScore;

/// Top of the Zipf scale; difficulty is measured down from here.
pub const ZIPF_CEILING: f64 = 7.0;

/// Number of words the webhook puts in a comment.
pub const TOP_N: usize = 30;

pub fn difficulty(index: &dyn PopularityIndex, word: &str) -> f64 {
    ZIPF_CEILING - index.zipf(word)
}

/// Ranks the distinct words of `text` by descending difficulty.
///
/// Equal scores keep the order in which the words first appear in `text`.
pub fn rank_difficult_words(
    text: &str,
    index: &dyn PopularityIndex,
    top_n: usize,
) -> Vec<WordScore> {
    rank_words(extract_words(text), index, top_n)
}

/// Ranks already-extracted distinct words, keeping their order on ties.
pub fn rank_words(
    words: Vec<String>,
    index: &dyn PopularityIndex,
    top_n: usize,
) -> Vec<WordScore> {
    let mut scored: Vec<WordScore> = words
        .into_iter()
        .map(|word| {
            let score = difficulty(index, &word);
            WordScore { word, score }
        })
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.truncate(top_n);
    scored
}
