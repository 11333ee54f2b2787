/// Result type for derivation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for derivation operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Key material did not decode to the required number of bytes
    #[error("Invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        /// Expected length in bytes
        expected: usize,
        /// Actual decoded length in bytes
        actual: usize,
    },

    /// A hex-expected input contained characters outside `[0-9A-Fa-f]`
    #[error("Input is not a valid hexadecimal string")]
    InvalidHex,

    /// Pad error
    #[error(transparent)]
    Pad(#[from] cipher::inout::PadError),

    /// Unpad error
    #[error(transparent)]
    Unpad(#[from] cipher::block_padding::UnpadError),
}
