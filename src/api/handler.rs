//! Lambda handler - thin adapter between the runtime and the pipeline.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

use crate::core::models::LambdaResponse;
use crate::pipeline::{Services, handle_request};

pub use self::function_handler as handler;

/// Lambda handler for the webhook entrypoint.
///
/// # Errors
///
/// Never returns `Err` for request or pipeline failures; those are reported as
/// 400/500 responses so API Gateway forwards them to the caller.
#[tracing::instrument(level = "info", skip(event, services), fields(request_id = %event.context.request_id))]
pub async fn function_handler(
    event: LambdaEvent<Value>,
    services: &Services,
) -> Result<LambdaResponse, Error> {
    info!("Webhook Lambda received request");

    let response = handle_request(&event.payload, services).await;

    info!(status_code = response.status_code, "Webhook Lambda finished");
    Ok(response)
}
