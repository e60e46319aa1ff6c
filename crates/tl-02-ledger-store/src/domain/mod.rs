//! Ledger domain: key layout, persisted records and the app hash chain.

pub mod app_hash;
pub mod errors;
pub mod keys;
pub mod records;

pub use app_hash::compute_app_hash;
pub use errors::{KVStoreError, StoreError};
pub use keys::{account_key, identity_from_key, ACCOUNT_PREFIX, APP_STATE_KEY};
pub use records::{AccountRecord, ApplicationState};
