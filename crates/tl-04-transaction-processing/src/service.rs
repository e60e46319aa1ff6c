//! # Transaction Processing Service
//!
//! Decode, validate and apply one transaction against the working ledger.

use crate::domain::applier::apply;
use crate::domain::errors::TxError;
use crate::domain::transaction::DeliveryRequest;
use crate::domain::validator::{TransactionValidator, ValidatedDelivery};
use shared_types::Amount;
use std::collections::BTreeMap;
use tl_01_signature_verification::{Ed25519Verifier, Identity, SignatureVerificationApi};
use tl_02_ledger_store::WorkingLedger;
use tl_03_authorization::RegistrySnapshot;

pub struct TransactionProcessor<V = Ed25519Verifier> {
    validator: TransactionValidator<V>,
}

impl Default for TransactionProcessor {
    fn default() -> Self {
        Self::new(Ed25519Verifier::new())
    }
}

impl<V: SignatureVerificationApi> TransactionProcessor<V> {
    pub fn new(verifier: V) -> Self {
        Self {
            validator: TransactionValidator::new(verifier),
        }
    }

    /// Process raw transaction bytes. On error the ledger is unchanged.
    pub fn deliver<L: WorkingLedger>(
        &self,
        raw: &[u8],
        registry: &RegistrySnapshot,
        ledger: &mut L,
    ) -> Result<BTreeMap<Identity, Amount>, TxError> {
        let request = DeliveryRequest::decode(raw)?;
        let delivery = self.validator.validate(&request, registry)?;
        let writes = apply(ledger, &delivery)?;

        match delivery {
            ValidatedDelivery::Mint { account, amount } => {
                tracing::debug!("[tl-04] ✅ Minted {} to {}", amount, account)
            }
            ValidatedDelivery::Burn { account, amount } => {
                tracing::debug!("[tl-04] ✅ Burned {} from {}", amount, account)
            }
            ValidatedDelivery::Transfer { from, to, amount, tax } => tracing::debug!(
                "[tl-04] ✅ Sent {} from {} to {} ({}% tax to {})",
                amount,
                from,
                to,
                tax.percentage,
                tax.receiver
            ),
        }
        Ok(writes)
    }
}
