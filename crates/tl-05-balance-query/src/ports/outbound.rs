use shared_types::{Amount, Timestamp};
use tl_01_signature_verification::Identity;
use tl_02_ledger_store::{CommittedView, KeyValueStore, StoreError};

/// Wall clock used for freshness checks.
pub trait TimeSource: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now(&self) -> Timestamp;
}

/// Read access to committed balances.
pub trait BalanceReader {
    fn balance(&self, identity: &Identity) -> Result<Amount, StoreError>;
}

impl<S: KeyValueStore> BalanceReader for CommittedView<S> {
    fn balance(&self, identity: &Identity) -> Result<Amount, StoreError> {
        CommittedView::balance(self, identity)
    }
}
