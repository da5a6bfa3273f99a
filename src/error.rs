use reqwest::StatusCode;

/// Errors produced by the catalog transport layer
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Catalog API returned status {status}: {detail}")]
    Api { status: StatusCode, detail: String },

    #[error("Failed to decode catalog response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Server-provided detail message, if the service sent one
    pub fn detail(&self) -> Option<&str> {
        match self {
            ClientError::Api { detail, .. } if !detail.is_empty() => Some(detail),
            _ => None,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

/// How a single search attempt ended when it did not produce results
///
/// Only `Transport` is user-visible. `Cancelled` is the expected result of a
/// newer query superseding this one; `ValidationSkip` is a query too short to
/// send.
#[derive(Debug)]
pub enum SearchOutcome {
    Cancelled,
    Transport(ClientError),
    ValidationSkip,
}
