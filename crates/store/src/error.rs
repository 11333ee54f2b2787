use reqwest::StatusCode;

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Transport or decoding failure in the underlying HTTP client
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The database API answered with a non-success status
    #[error("Store returned status {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status the API returned
        status: StatusCode,
        /// Response body, for the logs
        body: String,
    },
}
