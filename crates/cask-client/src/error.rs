use thiserror::Error;

/// Failure of a single daemon API call.
///
/// Every variant is terminal: nothing is retried or suppressed, and a
/// failed call never yields a partially decoded record. The variants let
/// callers tell a dead daemon (`Transport`) from a daemon-reported error
/// (`Status`, body verbatim) from a malformed payload (`Parse`) from a
/// payload of the wrong shape (`Decode`).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("daemon returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed JSON response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Decode(#[from] cask_types::DecodeError),
}

pub type ApiResult<T> = Result<T, ApiError>;
