//! # Cross-Crate Integration Tests
//!
//! Every test drives the application only through the consensus boundary
//! (`check_tx`, `deliver_tx`, `commit`, `query`, `info`).

pub mod persistence;
pub mod properties;
pub mod scenarios;
