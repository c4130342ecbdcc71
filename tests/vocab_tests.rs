use once_cell::sync::Lazy;
use vocab_comment::core::models::WordScore;
use vocab_comment::vocab::{
    PopularityIndex, WordFreqIndex, ZipfTable, extract_words, rank_difficult_words,
};

fn table(pairs: &[(&str, f64)]) -> ZipfTable {
    pairs.iter().map(|(w, z)| ((*w).to_string(), *z)).collect()
}

#[test]
fn test_extract_words_min_length_and_case() {
    let words = extract_words("Hello hello WORLD cat jumps");
    assert_eq!(words, vec!["hello", "world", "jumps"]);
}

#[test]
fn test_extract_words_ignores_short_and_glued_tokens() {
    // Four letters, digits and underscores do not form qualifying tokens
    let words = extract_words("four abcdefg123 under_score plain, quixotic!");
    assert_eq!(words, vec!["plain", "quixotic"]);
}

#[test]
fn test_extract_words_empty_text() {
    assert!(extract_words("").is_empty());
    assert!(extract_words("a bb ccc dddd").is_empty());
}

#[test]
fn test_rarer_word_ranks_higher() {
    let index = table(&[("there", 6.5), ("quixotic", 2.5)]);
    let ranked = rank_difficult_words("there quixotic", &index, 10);

    assert_eq!(ranked[0].word, "quixotic");
    assert_eq!(ranked[1].word, "there");
    assert!(ranked[0].score > ranked[1].score);
    assert!((ranked[1].score - 0.5).abs() < 1e-9);
}

#[test]
fn test_unknown_word_scores_maximum() {
    let index = table(&[("there", 6.5)]);
    assert_eq!(index.zipf("zzyzxqq"), 0.0);

    let ranked = rank_difficult_words("there zzyzxqq", &index, 10);
    assert_eq!(ranked[0].word, "zzyzxqq");
    assert!((ranked[0].score - 7.0).abs() < 1e-9);
}

#[test]
fn test_ties_keep_first_seen_order() {
    let index = table(&[]);
    let ranked = rank_difficult_words("gamma alpha betas gamma", &index, 10);
    let words: Vec<&str> = ranked.iter().map(|w| w.word.as_str()).collect();
    assert_eq!(words, vec!["gamma", "alpha", "betas"]);
}

#[test]
fn test_ranked_length_is_min_of_n_and_distinct() {
    let index = table(&[]);
    let text = "apple berry cherry dates elder apple";
    assert_eq!(rank_difficult_words(text, &index, 3).len(), 3);
    assert_eq!(rank_difficult_words(text, &index, 30).len(), 5);
    assert!(rank_difficult_words(text, &index, 0).is_empty());
}

fn english() -> &'static WordFreqIndex {
    static INDEX: Lazy<WordFreqIndex> =
        Lazy::new(|| WordFreqIndex::english().expect("wordfreq model loads"));
    &INDEX
}

fn position(ranked: &[WordScore], word: &str) -> usize {
    ranked
        .iter()
        .position(|w| w.word == word)
        .unwrap_or_else(|| panic!("{word} missing from ranking"))
}

#[test]
fn test_english_model_knows_everyday_words() {
    let index = english();
    for word in ["meeting", "engineer", "discussed", "budget", "computer", "people"] {
        assert!(index.zipf(word) > 3.5, "{word} should be common: {}", index.zipf(word));
    }
    assert!(index.zipf("there") > index.zipf("quixotic"));
}

#[test]
fn test_rare_words_outrank_everyday_words() {
    let text = "In the meeting the engineer discussed the budget and the computer \
                with quixotic serendipity while people listened";
    let ranked = rank_difficult_words(text, english(), 30);

    for rare in ["quixotic", "serendipity"] {
        for common in ["meeting", "engineer", "discussed", "budget", "computer", "people"] {
            assert!(
                position(&ranked, rare) < position(&ranked, common),
                "{rare} at {} should rank above {common} at {}",
                position(&ranked, rare),
                position(&ranked, common)
            );
        }
    }
}
