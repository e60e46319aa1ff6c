use crate::domain::errors::LoadError;
use crate::domain::snapshot::{RegistrySnapshot, RegistrySource, TaxPolicy};
use std::sync::Arc;
use tl_01_signature_verification::Identity;

/// Primary API of the authorization registry.
pub trait AuthorizationApi: Send + Sync {
    /// The current registry. Hold on to it for the duration of a request.
    fn snapshot(&self) -> Arc<RegistrySnapshot>;

    /// Replace inflators, watchers and tax policy together, or keep the
    /// current registry if `source` contains any invalid entry.
    fn reload(&self, source: &RegistrySource) -> Result<(), LoadError>;

    fn is_inflator(&self, identity: &Identity) -> bool {
        self.snapshot().is_inflator(identity)
    }

    fn is_watcher(&self, identity: &Identity) -> bool {
        self.snapshot().is_watcher(identity)
    }

    fn tax_policy(&self) -> Option<TaxPolicy> {
        self.snapshot().tax_policy()
    }
}
