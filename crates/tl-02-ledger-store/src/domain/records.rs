//! Persisted records, bincode-encoded.

use crate::domain::errors::StoreError;
use serde::{Deserialize, Serialize};
use shared_types::{Amount, Hash};

/// Balance record stored under an account key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    /// Balance in minor units.
    pub balance: i64,
}

impl AccountRecord {
    pub fn new(balance: Amount) -> Self {
        Self {
            balance: balance.minor(),
        }
    }

    pub fn amount(&self) -> Amount {
        Amount::from_minor(self.balance)
    }

    pub fn encode(&self) -> Result<Vec<u8>, StoreError> {
        bincode::serialize(self).map_err(|e| StoreError::Encoding(e.to_string()))
    }

    pub fn decode(key: &[u8], bytes: &[u8]) -> Result<Self, StoreError> {
        bincode::deserialize(bytes).map_err(|e| StoreError::corrupted(key, e))
    }
}

/// Metadata persisted alongside balances at every commit.
///
/// `height` counts commits. `size_counter` is incremented by exactly one per
/// commit. `app_hash` chains every committed block (see
/// [`compute_app_hash`](super::compute_app_hash)); it is all zeroes before
/// the first commit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationState {
    pub height: u64,
    pub size_counter: u64,
    pub app_hash: Hash,
}

impl ApplicationState {
    pub fn encode(&self) -> Result<Vec<u8>, StoreError> {
        bincode::serialize(self).map_err(|e| StoreError::Encoding(e.to_string()))
    }

    pub fn decode(key: &[u8], bytes: &[u8]) -> Result<Self, StoreError> {
        bincode::deserialize(bytes).map_err(|e| StoreError::corrupted(key, e))
    }
}
