//! # TaxLedger Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # TestNode: application + keys + manual clock
//! └── integration/
//!     ├── scenarios.rs  # Block-level walkthroughs of mint, transfer, query
//!     ├── properties.rs # Conservation, non-negativity, determinism
//!     └── persistence.rs# Restart and registry loading from content
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p tl-tests
//! cargo test -p tl-tests integration::properties::
//! cargo bench -p tl-tests
//! ```

pub mod fixtures;
pub mod integration;
