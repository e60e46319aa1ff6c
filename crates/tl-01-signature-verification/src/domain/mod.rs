//! # Domain Layer
//!
//! Pure cryptographic logic with no I/O dependencies.

pub mod canonical;
pub mod ed25519;
pub mod errors;
pub mod identity;
pub mod keys;
