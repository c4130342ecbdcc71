/// vocab-comment - a webhook that posts the hardest words of a transcript to a Jira issue.
///
/// A single Lambda function receives `{ issueKey, transcriptField }`, ranks the
/// rarest English words in the transcript, translates each one and posts the
/// result as a table comment on the issue.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - wordfreq Zipf frequencies for word difficulty
/// - Google Translate v2 for per-word translation
/// - The Jira REST API for posting the comment
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use vocab_comment::clients::{GoogleTranslateClient, JiraClient};
/// use vocab_comment::core::config::AppConfig;
/// use vocab_comment::pipeline::{Services, handle_request};
/// use vocab_comment::vocab::WordFreqIndex;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Set up structured logging
///     vocab_comment::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let services = Services {
///         translator: Arc::new(GoogleTranslateClient::new(&config)?),
///         tracker: Arc::new(JiraClient::new(&config)?),
///         popularity: Arc::new(WordFreqIndex::english()?),
///         translate_concurrency: config.translate_concurrency,
///     };
///
///     let event = serde_json::json!({
///         "issueKey": "ABC-1",
///         "transcriptField": "The quixotic fox jumped."
///     });
///     let response = handle_request(&event, &services).await;
///     println!("{}: {}", response.status_code, response.body);
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;
pub mod pipeline;
pub mod table;
pub mod vocab;

pub use errors::HandlerError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. The level comes from `RUST_LOG` and defaults
/// to `info`. Calling it more than once is a no-op.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// vocab_comment::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
