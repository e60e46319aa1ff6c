//! # tl-02-ledger-store
//!
//! Persistent balance ledger for the TaxLedger application.
//!
//! ## Role in System
//!
//! - **Working view**: balances as modified by every transaction delivered in
//!   the current block, held in a pending overlay until commit
//! - **Committed view**: balances as of the last commit, the only view that
//!   balance queries ever observe
//! - **Application state**: height, size counter and app hash, persisted in
//!   the same atomic batch as the block's balance writes
//!
//! ## Durability
//!
//! ```text
//! DeliverTx ──stage──→ [pending] ──Commit──→ atomic batch ──→ [KeyValueStore]
//!                                           (balances + meta)
//! ```
//!
//! A crash before commit leaves the store at the previous committed state.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::{FileBackedKVStore, InMemoryKVStore};
#[cfg(feature = "rocksdb")]
pub use adapters::{RocksDbConfig, RocksDbStore};
pub use domain::{
    account_key, compute_app_hash, AccountRecord, ApplicationState, KVStoreError, StoreError,
    ACCOUNT_PREFIX, APP_STATE_KEY,
};
pub use ports::{BatchOperation, KeyValueStore, ScanResult, WorkingLedger};
pub use service::{CommittedView, LedgerStore};
