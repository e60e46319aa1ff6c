//! # Node Container
//!
//! Configuration and the bootstrap that turns it into a running
//! application: registry first, then the ledger store, then the facade.

pub mod bootstrap;
pub mod config;

pub use bootstrap::{load_registry, open_application, BootstrapError};
pub use config::{load_config, ConfigError, NodeConfig, StorageBackend};
