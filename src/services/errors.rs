//! Failures of the page-load flow.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// The request could not be sent or the body could not be read.
    #[error("request to the report backend failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body is not JSON, or not shaped like a report payload.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The backend answered with an `error` field.
    #[error("{0}")]
    Payload(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Fetch,
    Payload,
}

impl ReportError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReportError::Transport(_) | ReportError::Decode(_) => ErrorKind::Fetch,
            ReportError::Payload(_) => ErrorKind::Payload,
        }
    }
}
