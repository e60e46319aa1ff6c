//! # Query Validation
//!
//! 1. freshness against the local clock
//! 2. watcher check when asking about another identity
//! 3. signature over the canonical payload
//!
//! Yields the identity whose balance should be returned.

use crate::domain::errors::QueryError;
use crate::domain::query::QueryRequest;
use shared_types::Timestamp;
use std::time::Duration;
use tl_01_signature_verification::{Ed25519Verifier, Identity, SignatureVerificationApi};
use tl_03_authorization::RegistrySnapshot;

/// Acceptance window for `requestedAt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreshnessPolicy {
    /// Oldest accepted request age (default 5s).
    pub max_age: Duration,
    /// How far ahead of the local clock a request may be dated (default 5s).
    pub max_future_skew: Duration,
}

impl Default for FreshnessPolicy {
    fn default() -> Self {
        Self {
            max_age: Duration::from_secs(5),
            max_future_skew: Duration::from_secs(5),
        }
    }
}

impl FreshnessPolicy {
    pub fn check(&self, requested_at: Timestamp, now: Timestamp) -> Result<(), QueryError> {
        let max_age_ms = self.max_age.as_millis() as u64;
        let max_skew_ms = self.max_future_skew.as_millis() as u64;

        if requested_at > now {
            let ahead_ms = requested_at - now;
            if ahead_ms > max_skew_ms {
                return Err(QueryError::FromFuture {
                    ahead_ms,
                    max_skew_ms,
                });
            }
            return Ok(());
        }

        let age_ms = now - requested_at;
        if age_ms > max_age_ms {
            return Err(QueryError::Stale { age_ms, max_age_ms });
        }
        Ok(())
    }
}

pub struct QueryValidator<V = Ed25519Verifier> {
    verifier: V,
    policy: FreshnessPolicy,
}

impl QueryValidator {
    pub fn with_policy(policy: FreshnessPolicy) -> Self {
        Self::new(Ed25519Verifier::new(), policy)
    }
}

impl<V: SignatureVerificationApi> QueryValidator<V> {
    pub fn new(verifier: V, policy: FreshnessPolicy) -> Self {
        Self { verifier, policy }
    }

    pub fn policy(&self) -> &FreshnessPolicy {
        &self.policy
    }

    pub fn validate(
        &self,
        request: &QueryRequest,
        registry: &RegistrySnapshot,
        now: Timestamp,
    ) -> Result<Identity, QueryError> {
        let data = &request.data;

        self.policy.check(data.requested_at, now)?;

        if data.on_behalf_of.is_some() {
            // A sender key that does not decode cannot be a registered watcher.
            let is_watcher = self
                .verifier
                .decode_identity(data.from.as_slice())
                .map(|from| registry.is_watcher(&from))
                .unwrap_or(false);
            if !is_watcher {
                return Err(QueryError::NotWatcher);
            }
        }

        let valid = self.verifier.verify(
            data.from.as_slice(),
            request.signature.as_slice(),
            &data.signing_bytes(),
        )?;
        if !valid {
            return Err(QueryError::InvalidSignature);
        }

        match &data.on_behalf_of {
            Some(target) => self
                .verifier
                .decode_identity(target.as_slice())
                .map_err(|_| QueryError::MalformedTarget),
            None => Ok(self.verifier.decode_identity(data.from.as_slice())?),
        }
    }
}
