//! # Shared Types Crate
//!
//! Value types used across every TaxLedger crate.
//!
//! ## Design Principles
//!
//! - **Integer money**: `Amount` is a fixed-point count of minor units. No
//!   floating point ever touches a balance.
//! - **Explicit wire forms**: byte fields travel as lowercase hex, amounts as
//!   decimal strings, so every replica decodes the same request identically.
//! - **One code table**: `ResponseCode` is the only vocabulary the consensus
//!   boundary speaks.

pub mod amount;
pub mod codes;
pub mod entities;
pub mod errors;

pub use amount::{Amount, DECIMALS, MINOR_UNITS_PER_COIN};
pub use codes::ResponseCode;
pub use entities::*;
pub use errors::*;
