use derive_more::Display;

use crate::validation::{FieldError, ValidationFailure};

#[derive(Debug, Display)]
pub enum ClientError {
    /// Input rejected locally; nothing was sent.
    #[display("{_0}")]
    Validation(ValidationFailure),

    /// Non-success status. Displays the server's message unmodified.
    #[display("{message}")]
    Api {
        status: u16,
        message: String,
        errors: Vec<FieldError>,
    },

    #[display("Network error: {_0}")]
    Transport(String),

    #[display("Unexpected response body: {_0}")]
    Decode(String),

    #[display("Response failed schema validation: {_0}")]
    InvalidResponse(ValidationFailure),

    #[display("A message is already being sent")]
    SubmissionInFlight,

    #[display("Invalid base URL: {_0}")]
    InvalidBaseUrl(String),
}

impl std::error::Error for ClientError {}

impl From<ValidationFailure> for ClientError {
    fn from(failure: ValidationFailure) -> Self {
        ClientError::Validation(failure)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}
