//! Jira API client module
//!
//! Posts comments through the Jira REST API v2 using basic auth.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::info;

use super::truncate_error_body;
use crate::core::config::AppConfig;
use crate::errors::HandlerError;

#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Adds `body` as a new comment on `issue_key`.
    async fn add_comment(&self, issue_key: &str, body: &str) -> Result<(), HandlerError>;
}

#[derive(Clone)]
pub struct JiraClient {
    base_url: String,
    user: String,
    token: String,
    client: Client,
}

impl JiraClient {
    pub fn new(config: &AppConfig) -> Result<Self, HandlerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| HandlerError::HttpError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.jira_url.trim_end_matches('/').to_string(),
            user: config.jira_user.clone(),
            token: config.jira_token.clone(),
            client,
        })
    }

    /// `POST` target for a comment on `issue_key`.
    pub fn comment_url(&self, issue_key: &str) -> String {
        format!(
            "{}/rest/api/2/issue/{}/comment",
            self.base_url,
            urlencoding::encode(issue_key)
        )
    }
}

impl std::fmt::Debug for JiraClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JiraClient")
            .field("base_url", &self.base_url)
            .field("user", &self.user)
            .field("token", &"***")
            .finish()
    }
}

#[async_trait]
impl IssueTracker for JiraClient {
    async fn add_comment(&self, issue_key: &str, body: &str) -> Result<(), HandlerError> {
        let response = self
            .client
            .post(self.comment_url(issue_key))
            .basic_auth(&self.user, Some(&self.token))
            .json(&json!({ "body": body }))
            .send()
            .await
            .map_err(|e| HandlerError::HttpError(format!("Jira API request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = truncate_error_body(
                &response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string()),
            );
            return Err(HandlerError::Tracker(format!(
                "add comment to {} failed ({}): {}",
                issue_key, status, error_text
            )));
        }

        info!(issue_key, "Posted comment to Jira");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AppConfig {
        AppConfig::from_lookup(|name| {
            match name {
                "GOOGLE_API_KEY" => Some("key"),
                "JIRA_USER" => Some("bot@example.com"),
                "JIRA_TOKEN" => Some("secret"),
                "JIRA_URL" => Some("https://example.atlassian.net/"),
                _ => None,
            }
            .map(String::from)
        })
        .unwrap()
    }

    #[test]
    fn comment_url_encodes_issue_key() {
        let client = JiraClient::new(&config()).unwrap();
        assert_eq!(
            client.comment_url("ABC-1"),
            "https://example.atlassian.net/rest/api/2/issue/ABC-1/comment"
        );
        assert_eq!(
            client.comment_url("A B/1"),
            "https://example.atlassian.net/rest/api/2/issue/A%20B%2F1/comment"
        );
    }

    #[test]
    fn debug_hides_token() {
        let client = JiraClient::new(&config()).unwrap();
        let out = format!("{client:?}");
        assert!(!out.contains("secret"));
    }
}
