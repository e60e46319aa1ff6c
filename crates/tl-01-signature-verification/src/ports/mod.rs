//! # Ports Layer
//!
//! - **Inbound (Driving)**: the verification API consumed by the
//!   transaction and query validators.

pub mod inbound;
