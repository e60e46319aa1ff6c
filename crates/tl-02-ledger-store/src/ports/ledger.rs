use crate::domain::errors::StoreError;
use shared_types::Amount;
use std::collections::BTreeMap;
use tl_01_signature_verification::Identity;

/// The working view of balances during block execution.
///
/// Reads observe every write staged earlier in the same block. Writes become
/// durable only when the block is committed.
pub trait WorkingLedger {
    /// Current balance; an unknown identity has balance zero.
    fn balance(&self, identity: &Identity) -> Result<Amount, StoreError>;

    /// Stage all `writes` together, or none of them.
    ///
    /// Fails with [`StoreError::NegativeBalance`] if any balance is negative.
    fn stage(&mut self, writes: BTreeMap<Identity, Amount>) -> Result<(), StoreError>;

    fn set_balance(&mut self, identity: Identity, balance: Amount) -> Result<(), StoreError> {
        self.stage(BTreeMap::from([(identity, balance)]))
    }
}
