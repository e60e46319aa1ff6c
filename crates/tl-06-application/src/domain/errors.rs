use thiserror::Error;
use tl_02_ledger_store::StoreError;
use tl_03_authorization::LoadError;

/// Failures the node cannot answer with a response code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    #[error("Ledger store failure: {0}")]
    Store(#[from] StoreError),

    #[error("Registry failure: {0}")]
    Registry(#[from] LoadError),
}
