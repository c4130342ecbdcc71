use thiserror::Error;

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("{0} are required")]
    MissingField(&'static str),

    #[error("Failed to parse request payload: {0}")]
    InvalidPayload(String),

    #[error("Failed to access translation API: {0}")]
    Translation(String),

    #[error("Failed to access Jira API: {0}")]
    Tracker(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl HandlerError {
    /// Validation failures are the caller's fault; everything else is ours.
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::MissingField(_) => 400,
            _ => 500,
        }
    }

    /// Text placed in the response body for this error.
    pub fn response_body(&self) -> String {
        match self {
            HandlerError::MissingField(_) => self.to_string(),
            other => format!("Error: {other}"),
        }
    }
}

impl From<reqwest::Error> for HandlerError {
    fn from(error: reqwest::Error) -> Self {
        HandlerError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for HandlerError {
    fn from(error: serde_json::Error) -> Self {
        HandlerError::InvalidPayload(error.to_string())
    }
}
