use shared_types::Amount;
use thiserror::Error;
use tl_01_signature_verification::Identity;

/// Failures reported by a [`KeyValueStore`](crate::ports::KeyValueStore) backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KVStoreError {
    #[error("KV store I/O error: {message}")]
    IOError { message: String },

    #[error("KV store corruption: {message}")]
    CorruptionError { message: String },
}

/// Ledger-level failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error(transparent)]
    Backend(#[from] KVStoreError),

    /// A persisted record could not be decoded. Fatal on open.
    #[error("Corrupted record under key {key}: {reason}")]
    Corrupted { key: String, reason: String },

    /// Staging would have persisted a negative balance.
    #[error("Negative balance {balance} for {identity}")]
    NegativeBalance { identity: Identity, balance: Amount },

    #[error("Record encoding failed: {0}")]
    Encoding(String),
}

impl StoreError {
    pub(crate) fn corrupted(key: &[u8], reason: impl ToString) -> Self {
        StoreError::Corrupted {
            key: hex::encode(key),
            reason: reason.to_string(),
        }
    }
}
