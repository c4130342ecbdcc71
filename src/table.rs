//! Comment table rendering.

use crate::core::models::{TranslatedWord, TranslationOutcome};

pub const TABLE_HEADER: &str = "| Rank | English | Translation |";

/// Shown in place of a translation the API could not provide.
pub const TRANSLATION_UNAVAILABLE: &str = "(translation unavailable)";

/// Keeps a cell on one row: pipes are escaped and line breaks become spaces.
pub fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
        .split(['\r', '\n'])
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn translation_cell(outcome: &TranslationOutcome) -> String {
    match outcome {
        TranslationOutcome::Translated(text) => escape_cell(text),
        TranslationOutcome::Failed => TRANSLATION_UNAVAILABLE.to_string(),
    }
}

/// Renders the header plus one 1-indexed row per word, in the given order.
#[must_use]
pub fn render_table(rows: &[TranslatedWord]) -> String {
    let mut table = String::from(TABLE_HEADER);
    table.push('\n');

    for (i, row) in rows.iter().enumerate() {
        table.push_str(&format!(
            "| {} | {} | {} |\n",
            i + 1,
            row.word,
            translation_cell(&row.outcome)
        ));
    }

    table
}
