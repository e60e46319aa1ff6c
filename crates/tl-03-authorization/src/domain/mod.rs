pub mod documents;
pub mod errors;
pub mod snapshot;

pub use documents::{KeyEntry, TaxDocument};
pub use errors::LoadError;
pub use snapshot::{RegistrySnapshot, RegistrySource, TaxConfig, TaxPolicy, TaxSource};
