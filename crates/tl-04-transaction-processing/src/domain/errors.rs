use shared_types::ResponseCode;
use thiserror::Error;
use tl_01_signature_verification::SignatureError;
use tl_02_ledger_store::StoreError;

/// Why a transaction was rejected. The `Display` text is the response log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TxError {
    #[error("The json is not correct: {0}")]
    Malformed(String),

    #[error("Coins can not be the number of zero or negative.")]
    NonPositiveAmount,

    #[error("The transaction is not well formed: {0}")]
    BadSignatureEncoding(#[from] SignatureError),

    #[error("The signature does not validate the transaction.")]
    InvalidSignature,

    #[error("You are not inflator.")]
    NotInflator,

    #[error("The field {0} is only allowed on send.")]
    UnexpectedField(&'static str),

    #[error("The receiver's public key is empty.")]
    MissingRecipient,

    #[error("The receiver's public key is not correct.")]
    MalformedRecipient,

    #[error("The tax is not included.")]
    MissingTaxReference,

    #[error("The tax reference is not trusted.")]
    UntrustedTaxReference,

    #[error("No tax policy is configured.")]
    TaxNotConfigured,

    #[error("Insufficient balance.")]
    InsufficientBalance,

    #[error("The resulting balance is out of range.")]
    Overflow,

    #[error("Ledger unavailable: {0}")]
    Store(#[from] StoreError),
}

impl TxError {
    pub fn code(&self) -> ResponseCode {
        match self {
            TxError::Malformed(_)
            | TxError::BadSignatureEncoding(_)
            | TxError::UnexpectedField(_)
            | TxError::MalformedRecipient => ResponseCode::EncodingError,
            TxError::Store(_) => ResponseCode::Internal,
            _ => ResponseCode::Unauthorized,
        }
    }
}
