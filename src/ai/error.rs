//! Failures of the completion call

use thiserror::Error;

/// Anything that can go wrong between sending a prompt and reading its text
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("request to completion service timed out")]
    Timeout(#[source] reqwest::Error),
    #[error("could not reach completion service: {0}")]
    Network(#[source] reqwest::Error),
    #[error("completion service returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("malformed completion response: {0}")]
    MalformedResponse(String),
    #[error("completion response contained no choices")]
    NoChoices,
}

impl From<reqwest::Error> for CompletionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else if err.is_decode() {
            Self::MalformedResponse(err.to_string())
        } else {
            Self::Network(err)
        }
    }
}
