use thiserror::Error;

/// Errors returned by AI Cats API operations.
#[derive(Error, Debug)]
pub enum CatsError {
    /// The API returned a non-success HTTP status.
    #[error("{context}: server returned {status} {status_text}")]
    RequestFailed {
        context: &'static str,
        status: u16,
        status_text: String,
    },

    /// Network-level request failure with context.
    #[error("{context}: {source}")]
    Network {
        context: &'static str,
        source: reqwest::Error,
    },

    /// The response body could not be interpreted as expected.
    #[error("{0}")]
    InvalidResponse(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, CatsError>;
