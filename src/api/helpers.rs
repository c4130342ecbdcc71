//! Response builders for the webhook handler.

use crate::core::models::LambdaResponse;
use crate::errors::HandlerError;

pub const SUCCESS_BODY: &str = "Comment posted successfully";

/// Returns the 200 response sent after the comment is posted.
#[must_use]
pub fn ok_posted() -> LambdaResponse {
    LambdaResponse {
        status_code: 200,
        body: SUCCESS_BODY.to_string(),
    }
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> LambdaResponse {
    LambdaResponse {
        status_code,
        body: message.to_string(),
    }
}

/// Maps a pipeline error to its status code and body text.
#[must_use]
pub fn from_error(error: &HandlerError) -> LambdaResponse {
    err_response(error.status_code(), &error.response_body())
}
