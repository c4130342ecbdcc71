//! Request pipeline: validate, rank, translate, render, post.

use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info, warn};

use crate::api::{helpers, parsing};
use crate::clients::{IssueTracker, Translator, translate_all};
use crate::core::models::{CommentRequest, LambdaResponse, TranslationOutcome};
use crate::errors::HandlerError;
use crate::table::render_table;
use crate::vocab::{PopularityIndex, TOP_N, extract_words, rank_words};

/// Everything one invocation needs, built once at cold start.
#[derive(Clone)]
pub struct Services {
    pub translator: Arc<dyn Translator>,
    pub tracker: Arc<dyn IssueTracker>,
    pub popularity: Arc<dyn PopularityIndex>,
    pub translate_concurrency: usize,
}

/// Runs one webhook event to completion and maps the outcome to a response.
pub async fn handle_request(event: &Value, services: &Services) -> LambdaResponse {
    match process_event(event, services).await {
        Ok(()) => helpers::ok_posted(),
        Err(e @ HandlerError::MissingField(_)) => {
            warn!(error = %e, "Rejected request");
            helpers::from_error(&e)
        }
        Err(e) => {
            error!(error = %e, "Failed to post vocabulary comment");
            helpers::from_error(&e)
        }
    }
}

async fn process_event(event: &Value, services: &Services) -> Result<(), HandlerError> {
    let data = parsing::normalize_payload(event)?;
    let request = parsing::extract_request(&data)?;
    post_vocabulary_comment(&request, services).await
}

/// Builds the vocabulary table for `request` and posts it as one comment.
#[tracing::instrument(level = "info", skip_all, fields(issue_key = %request.issue_key))]
pub async fn post_vocabulary_comment(
    request: &CommentRequest,
    services: &Services,
) -> Result<(), HandlerError> {
    let distinct = extract_words(&request.transcript_field);
    let distinct_count = distinct.len();
    let ranked = rank_words(distinct, services.popularity.as_ref(), TOP_N);
    info!(
        distinct = distinct_count,
        selected = ranked.len(),
        "Ranked difficult words"
    );

    let words: Vec<String> = ranked.into_iter().map(|w| w.word).collect();
    let rows = translate_all(
        services.translator.as_ref(),
        &words,
        services.translate_concurrency,
    )
    .await;

    let failed = rows
        .iter()
        .filter(|r| r.outcome == TranslationOutcome::Failed)
        .count();
    if failed > 0 {
        warn!(failed, total = rows.len(), "Some translations unavailable");
    }

    let table = render_table(&rows);
    info!(comment_len = table.len(), "Rendered comment table");

    services
        .tracker
        .add_comment(&request.issue_key, &table)
        .await
}
