// This is the Lambda bootstrap entry point for the webhook function

use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use tracing::{error, info};

use vocab_comment::api::handler;
use vocab_comment::clients::{GoogleTranslateClient, JiraClient};
use vocab_comment::core::config::AppConfig;
use vocab_comment::pipeline::Services;
use vocab_comment::vocab::load_index;

#[tokio::main]
async fn main() -> Result<(), Error> {
    vocab_comment::setup_logging();

    // Config is read once per container, not per event
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    info!(config = ?config, "Loaded configuration");

    let popularity = load_index(config.wordfreq_table_path.as_deref())?;
    let services = Arc::new(Services {
        translator: Arc::new(GoogleTranslateClient::new(&config)?),
        tracker: Arc::new(JiraClient::new(&config)?),
        popularity: Arc::from(popularity),
        translate_concurrency: config.translate_concurrency,
    });

    run(service_fn(move |event: LambdaEvent<Value>| {
        let services = Arc::clone(&services);
        async move { handler(event, &services).await }
    }))
    .await
}
