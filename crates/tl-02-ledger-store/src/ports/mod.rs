//! # Ports
//!
//! - [`KeyValueStore`]: driven port implemented by the storage adapters
//! - [`WorkingLedger`]: driving port used by transaction processing

pub mod database;
pub mod ledger;

pub use database::{BatchOperation, KeyValueStore, ScanResult};
pub use ledger::WorkingLedger;
