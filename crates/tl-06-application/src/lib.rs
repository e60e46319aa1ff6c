//! # tl-06-application
//!
//! The object the consensus engine drives. Per block the engine calls
//! `check_tx` any number of times, `deliver_tx` once per ordered
//! transaction, then `commit` exactly once. `query` may run at any time and
//! observes the state as of the last commit.
//!
//! ## Locking
//!
//! `deliver_tx`, `commit` and `info` serialize on the ledger mutex. `query`
//! never takes it: it reads the committed store through a separate handle,
//! so uncommitted deliveries are invisible to it.

pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

pub use config::ApplicationConfig;
pub use domain::{
    ApplicationError, ResponseCheckTx, ResponseCommit, ResponseDeliverTx, ResponseInfo,
    ResponseQuery,
};
pub use ports::ConsensusApplication;
pub use service::Application;
