//! # Balance Query Service

use crate::domain::errors::QueryError;
use crate::domain::query::{QueryRequest, QueryResponse};
use crate::domain::validator::{FreshnessPolicy, QueryValidator};
use crate::ports::outbound::{BalanceReader, TimeSource};
use tl_01_signature_verification::{Ed25519Verifier, SignatureVerificationApi};
use tl_03_authorization::RegistrySnapshot;

pub struct BalanceQueryService<T, V = Ed25519Verifier> {
    validator: QueryValidator<V>,
    time: T,
}

impl<T: TimeSource> BalanceQueryService<T> {
    pub fn new(time: T, policy: FreshnessPolicy) -> Self {
        Self::with_verifier(time, Ed25519Verifier::new(), policy)
    }
}

impl<T: TimeSource, V: SignatureVerificationApi> BalanceQueryService<T, V> {
    pub fn with_verifier(time: T, verifier: V, policy: FreshnessPolicy) -> Self {
        Self {
            validator: QueryValidator::new(verifier, policy),
            time,
        }
    }

    /// Validate `raw` and answer it from `balances`. Never mutates state.
    pub fn answer<R: BalanceReader>(
        &self,
        raw: &[u8],
        registry: &RegistrySnapshot,
        balances: &R,
    ) -> Result<QueryResponse, QueryError> {
        let request = QueryRequest::decode(raw)?;
        let target = self
            .validator
            .validate(&request, registry, self.time.now())?;
        let balance = balances.balance(&target)?;
        tracing::debug!("[tl-05] Answered balance query for {}", target);
        Ok(QueryResponse { balance })
    }
}
