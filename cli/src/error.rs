//! CLI error type.

use wire::AttachmentError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("not signed in; run `campus login <email> <password>` first")]
    NotSignedIn,
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Non-success response; `message` is the backend `detail` or a fallback.
    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Attachment(#[from] AttachmentError),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Backend message for `Api` errors, `None` for transport or local failures.
    #[must_use]
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => Some(message),
            _ => None,
        }
    }
}
