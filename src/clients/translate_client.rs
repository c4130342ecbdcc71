//! Translation API client module
//!
//! Wraps Google Translate v2 for single-word lookups and fans a ranked word
//! list out over it without letting one failed word sink the rest.

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use super::truncate_error_body;
use crate::api::parsing::v_path;
use crate::core::config::AppConfig;
use crate::core::models::{TranslatedWord, TranslationOutcome};
use crate::errors::HandlerError;

pub const GOOGLE_TRANSLATE_URL: &str = "https://translation.googleapis.com/language/translate/v2";

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, word: &str) -> Result<String, HandlerError>;
}

/// Google Translate v2 client bound to one target language.
#[derive(Clone)]
pub struct GoogleTranslateClient {
    api_key: String,
    target_lang: String,
    base_url: String,
    client: Client,
}

impl GoogleTranslateClient {
    pub fn new(config: &AppConfig) -> Result<Self, HandlerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| HandlerError::HttpError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key: config.google_api_key.clone(),
            target_lang: config.target_lang.clone(),
            base_url: GOOGLE_TRANSLATE_URL.to_string(),
            client,
        })
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn target_lang(&self) -> &str {
        &self.target_lang
    }
}

impl std::fmt::Debug for GoogleTranslateClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleTranslateClient")
            .field("api_key", &"***")
            .field("target_lang", &self.target_lang)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Reads `data.translations[0].translatedText` out of an API response.
pub fn parse_translation(response: &Value) -> Option<String> {
    v_path(response, &["data", "translations"])
        .and_then(Value::as_array)
        .and_then(|translations| translations.first())
        .and_then(|t| t.get("translatedText"))
        .and_then(Value::as_str)
        .map(ToString::to_string)
}

#[async_trait]
impl Translator for GoogleTranslateClient {
    async fn translate(&self, word: &str) -> Result<String, HandlerError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", word),
                ("target", self.target_lang.as_str()),
                ("format", "text"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            // the URL carries the API key
            .map_err(|e| {
                HandlerError::HttpError(format!("Translation request failed: {}", e.without_url()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = truncate_error_body(
                &response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string()),
            );
            return Err(HandlerError::Translation(format!(
                "API error ({}): {}",
                status, error_text
            )));
        }

        let json: Value = response.json().await.map_err(|e| {
            HandlerError::Translation(format!(
                "Failed to parse API response: {}",
                e.without_url()
            ))
        })?;

        #[cfg(feature = "debug-logs")]
        debug!(word, response = %json, "Translation API response");

        parse_translation(&json).ok_or_else(|| {
            HandlerError::Translation(
                "Invalid API response: missing 'data.translations[0].translatedText'".to_string(),
            )
        })
    }
}

/// Translates every word, keeping input order.
///
/// At most `concurrency` requests are in flight; `1` translates strictly one
/// word at a time. A failed word becomes [`TranslationOutcome::Failed`].
pub async fn translate_all(
    translator: &dyn Translator,
    words: &[String],
    concurrency: usize,
) -> Vec<TranslatedWord> {
    stream::iter(words.iter().map(move |word| async move {
        let outcome = match translator.translate(word).await {
            Ok(text) => TranslationOutcome::Translated(text),
            Err(e) => {
                warn!(word = %word, error = %e, "Translation failed, using placeholder");
                TranslationOutcome::Failed
            }
        };
        debug!(word = %word, ok = matches!(outcome, TranslationOutcome::Translated(_)), "Translated word");
        TranslatedWord {
            word: word.clone(),
            outcome,
        }
    }))
    .buffered(concurrency.max(1))
    .collect()
    .await
}
