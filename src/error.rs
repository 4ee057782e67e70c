use reqwest::StatusCode;
use thiserror::Error;

/// Failure modes of a single upstream fetch.
///
/// Each sub-case is kept distinct so the tool layer can report what
/// actually went wrong instead of a bare "no data".
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(reqwest::Error),

    #[error("request failed with status: {0}")]
    Status(StatusCode),

    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Network(e)
        }
    }
}
