use crate::domain::documents::{KeyEntry, TaxDocument};
use crate::domain::errors::LoadError;
use std::collections::BTreeSet;
use tl_01_signature_verification::Identity;

/// Fixed percentage of every transfer credited to `receiver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxPolicy {
    /// 0..=100
    pub percentage: u8,
    pub receiver: Identity,
}

/// The active tax policy together with the reference token transfers must quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxConfig {
    pub reference: String,
    pub policy: TaxPolicy,
}

/// Unvalidated input for building a registry.
#[derive(Debug, Clone, Default)]
pub struct RegistrySource {
    pub inflators: Vec<KeyEntry>,
    pub watchers: Vec<KeyEntry>,
    pub tax: Option<TaxSource>,
}

#[derive(Debug, Clone)]
pub struct TaxSource {
    pub reference: String,
    pub document: TaxDocument,
}

/// Immutable view of the registry used for the whole of one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrySnapshot {
    inflators: BTreeSet<Identity>,
    watchers: BTreeSet<Identity>,
    tax: Option<TaxConfig>,
}

fn decode_list(list: &'static str, entries: &[KeyEntry]) -> Result<BTreeSet<Identity>, LoadError> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            Identity::from_hex(&entry.public_key_hex).map_err(|_| LoadError::InvalidKey {
                list,
                index,
                key: entry.public_key_hex.clone(),
            })
        })
        .collect()
}

impl RegistrySnapshot {
    /// Validate every entry of `source`. One bad entry fails the whole build.
    pub fn build(source: &RegistrySource) -> Result<Self, LoadError> {
        let inflators = decode_list("inflators", &source.inflators)?;
        let watchers = decode_list("watchers", &source.watchers)?;

        let tax = match &source.tax {
            None => None,
            Some(TaxSource { reference, document }) => {
                let percentage = u8::try_from(document.percentage)
                    .ok()
                    .filter(|p| *p <= 100)
                    .ok_or(LoadError::InvalidPercentage(document.percentage))?;
                let receiver = Identity::from_hex(&document.public_key_hex).map_err(|_| {
                    LoadError::InvalidKey {
                        list: "tax",
                        index: 0,
                        key: document.public_key_hex.clone(),
                    }
                })?;
                Some(TaxConfig {
                    reference: reference.clone(),
                    policy: TaxPolicy {
                        percentage,
                        receiver,
                    },
                })
            }
        };

        Ok(Self {
            inflators,
            watchers,
            tax,
        })
    }

    pub fn is_inflator(&self, identity: &Identity) -> bool {
        self.inflators.contains(identity)
    }

    pub fn is_watcher(&self, identity: &Identity) -> bool {
        self.watchers.contains(identity)
    }

    pub fn tax(&self) -> Option<&TaxConfig> {
        self.tax.as_ref()
    }

    pub fn tax_policy(&self) -> Option<TaxPolicy> {
        self.tax.as_ref().map(|t| t.policy)
    }

    pub fn inflator_count(&self) -> usize {
        self.inflators.len()
    }

    pub fn watcher_count(&self) -> usize {
        self.watchers.len()
    }
}
