//! # Authorization Service
//!
//! [`AuthorizationRegistry`] holds the current [`RegistrySnapshot`] behind a
//! lock and swaps it wholesale on reload. [`RegistryLoader`] turns three
//! content addresses into a [`RegistrySource`].

use crate::domain::documents::{KeyEntry, TaxDocument};
use crate::domain::errors::LoadError;
use crate::domain::snapshot::{RegistrySnapshot, RegistrySource, TaxSource};
use crate::ports::inbound::AuthorizationApi;
use crate::ports::outbound::ContentStore;
use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Debug)]
pub struct AuthorizationRegistry {
    current: RwLock<Arc<RegistrySnapshot>>,
}

impl AuthorizationRegistry {
    /// A registry with no inflators, no watchers and no tax policy.
    pub fn empty() -> Self {
        Self {
            current: RwLock::new(Arc::new(RegistrySnapshot::default())),
        }
    }

    pub fn from_source(source: &RegistrySource) -> Result<Self, LoadError> {
        let registry = Self::empty();
        registry.reload(source)?;
        Ok(registry)
    }
}

impl Default for AuthorizationRegistry {
    fn default() -> Self {
        Self::empty()
    }
}

impl AuthorizationApi for AuthorizationRegistry {
    fn snapshot(&self) -> Arc<RegistrySnapshot> {
        self.current.read().clone()
    }

    fn reload(&self, source: &RegistrySource) -> Result<(), LoadError> {
        let next = match RegistrySnapshot::build(source) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!("[tl-03] Registry reload rejected, keeping previous: {}", e);
                return Err(e);
            }
        };

        tracing::info!(
            "[tl-03] 🔑 Registry loaded: {} inflators, {} watchers, tax {}",
            next.inflator_count(),
            next.watcher_count(),
            next.tax()
                .map(|t| format!("{}% to {}", t.policy.percentage, t.policy.receiver))
                .unwrap_or_else(|| "not configured".to_string())
        );
        *self.current.write() = Arc::new(next);
        Ok(())
    }
}

/// Content addresses of the three registry documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryAddresses {
    pub inflators: String,
    pub watchers: String,
    pub tax: String,
}

pub struct RegistryLoader<C> {
    store: C,
}

impl<C: ContentStore> RegistryLoader<C> {
    pub fn new(store: C) -> Self {
        Self { store }
    }

    /// Fetch and parse all three documents. The tax address becomes the tax
    /// reference token.
    pub fn load(&self, addresses: &RegistryAddresses) -> Result<RegistrySource, LoadError> {
        let inflators =
            KeyEntry::parse_list("inflators", &self.store.fetch(&addresses.inflators)?)?;
        let watchers = KeyEntry::parse_list("watchers", &self.store.fetch(&addresses.watchers)?)?;
        let document = TaxDocument::parse(&self.store.fetch(&addresses.tax)?)?;

        Ok(RegistrySource {
            inflators,
            watchers,
            tax: Some(TaxSource {
                reference: addresses.tax.clone(),
                document,
            }),
        })
    }
}
