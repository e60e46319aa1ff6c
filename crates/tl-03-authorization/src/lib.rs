//! # tl-03-authorization
//!
//! Who may do what: the sets of *inflators* (may mint and burn) and
//! *watchers* (may query another identity's balance), plus the single tax
//! policy applied to every transfer.
//!
//! ## Consistency
//!
//! The registry is read through immutable [`RegistrySnapshot`]s. A reload
//! builds a complete new snapshot and swaps it in; if any entry of any
//! document is invalid the reload fails and the previous snapshot stays.
//!
//! ## Loading
//!
//! [`RegistryLoader`] fetches the three registry documents from a
//! [`ContentStore`] by content address (hex SHA-256 of the document bytes).
//! The tax document's address doubles as the tax reference token that every
//! transfer must carry.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::{content_address, DirectoryContentStore, InMemoryContentStore};
pub use domain::{
    KeyEntry, LoadError, RegistrySnapshot, RegistrySource, TaxConfig, TaxDocument, TaxPolicy,
    TaxSource,
};
pub use ports::{AuthorizationApi, ContentStore};
pub use service::{AuthorizationRegistry, RegistryAddresses, RegistryLoader};
