use thiserror::Error;

/// Registry loading failures. Any of these aborts the whole load or reload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("Invalid content address {0:?}: expected 64 lowercase hex characters")]
    InvalidAddress(String),

    #[error("Content {0} not found")]
    NotFound(String),

    #[error("Content store I/O error for {address}: {message}")]
    Io { address: String, message: String },

    #[error("Content {address} does not match its digest")]
    DigestMismatch { address: String },

    #[error("The json for the {document} is not correct: {reason}")]
    MalformedDocument {
        document: &'static str,
        reason: String,
    },

    #[error("The {list} public key at index {index} is not correct: {key:?}")]
    InvalidKey {
        list: &'static str,
        index: usize,
        key: String,
    },

    #[error("Tax percentage {0} is outside 0..=100")]
    InvalidPercentage(i64),
}
