//! Difficult-word extraction and ranking

pub mod extract;
pub mod frequency;
pub mod scoring;

pub use extract::extract_words;
pub use frequency::{PopularityIndex, WordFreqIndex, ZipfTable, load_index};
pub use scoring::{TOP_N, rank_difficult_words, rank_words};
