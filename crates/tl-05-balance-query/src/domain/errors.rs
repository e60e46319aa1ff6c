use shared_types::ResponseCode;
use thiserror::Error;
use tl_01_signature_verification::SignatureError;
use tl_02_ledger_store::StoreError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("The query request is not json: {0}")]
    Malformed(String),

    #[error("Request passed its time.")]
    Stale { age_ms: u64, max_age_ms: u64 },

    #[error("Request is dated in the future.")]
    FromFuture { ahead_ms: u64, max_skew_ms: u64 },

    #[error("You are not a watcher.")]
    NotWatcher,

    #[error("The query is not well formed: {0}")]
    BadSignatureEncoding(#[from] SignatureError),

    #[error("The signature does not validate the query.")]
    InvalidSignature,

    #[error("The queried public key is not correct.")]
    MalformedTarget,

    #[error("Ledger unavailable: {0}")]
    Store(#[from] StoreError),
}

impl QueryError {
    pub fn code(&self) -> ResponseCode {
        match self {
            QueryError::Malformed(_)
            | QueryError::BadSignatureEncoding(_)
            | QueryError::MalformedTarget => ResponseCode::EncodingError,
            QueryError::Store(_) => ResponseCode::Internal,
            QueryError::Stale { .. }
            | QueryError::FromFuture { .. }
            | QueryError::NotWatcher
            | QueryError::InvalidSignature => ResponseCode::Unauthorized,
        }
    }
}
