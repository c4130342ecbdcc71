//! Client modules for external API interactions

pub mod jira_client;
pub mod translate_client;

pub use jira_client::{IssueTracker, JiraClient};
pub use translate_client::{GoogleTranslateClient, Translator, translate_all};

/// Longest upstream error body kept in an error message.
pub const MAX_ERROR_BODY_CHARS: usize = 500;

/// Cuts an upstream error body to [`MAX_ERROR_BODY_CHARS`] characters.
pub fn truncate_error_body(text: &str) -> String {
    text.chars().take(MAX_ERROR_BODY_CHARS).collect()
}
