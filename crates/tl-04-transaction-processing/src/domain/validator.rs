//! # Transaction Validation
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. amount is positive
//! 2. signature over the canonical payload
//! 3. action-specific authorization
//!
//! Balance sufficiency is checked when the transaction is applied.

use crate::domain::errors::TxError;
use crate::domain::transaction::{Action, DeliveryRequest};
use shared_types::Amount;
use tl_01_signature_verification::{Ed25519Verifier, Identity, SignatureVerificationApi};
use tl_03_authorization::{RegistrySnapshot, TaxPolicy};

/// A transaction that passed every check except balance sufficiency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedDelivery {
    Mint {
        account: Identity,
        amount: Amount,
    },
    Burn {
        account: Identity,
        amount: Amount,
    },
    Transfer {
        from: Identity,
        to: Identity,
        amount: Amount,
        tax: TaxPolicy,
    },
}

pub struct TransactionValidator<V = Ed25519Verifier> {
    verifier: V,
}

impl Default for TransactionValidator {
    fn default() -> Self {
        Self::new(Ed25519Verifier::new())
    }
}

impl<V: SignatureVerificationApi> TransactionValidator<V> {
    pub fn new(verifier: V) -> Self {
        Self { verifier }
    }

    pub fn validate(
        &self,
        request: &DeliveryRequest,
        registry: &RegistrySnapshot,
    ) -> Result<ValidatedDelivery, TxError> {
        let data = &request.data;

        if !data.amount.is_positive() {
            return Err(TxError::NonPositiveAmount);
        }

        let valid = self.verifier.verify(
            data.from.as_slice(),
            request.signature.as_slice(),
            &data.signing_bytes(),
        )?;
        if !valid {
            return Err(TxError::InvalidSignature);
        }
        let from = self.verifier.decode_identity(data.from.as_slice())?;

        match data.action {
            Action::Add | Action::Remove => {
                if !registry.is_inflator(&from) {
                    return Err(TxError::NotInflator);
                }
                if data.to.is_some() {
                    return Err(TxError::UnexpectedField("to"));
                }
                if data.tax_reference.is_some() {
                    return Err(TxError::UnexpectedField("taxReference"));
                }
                Ok(if data.action == Action::Add {
                    ValidatedDelivery::Mint {
                        account: from,
                        amount: data.amount,
                    }
                } else {
                    ValidatedDelivery::Burn {
                        account: from,
                        amount: data.amount,
                    }
                })
            }
            Action::Send => {
                let to = data.to.as_ref().ok_or(TxError::MissingRecipient)?;
                let to = self
                    .verifier
                    .decode_identity(to.as_slice())
                    .map_err(|_| TxError::MalformedRecipient)?;
                let reference = data
                    .tax_reference
                    .as_deref()
                    .ok_or(TxError::MissingTaxReference)?;
                let tax = registry.tax().ok_or(TxError::TaxNotConfigured)?;
                if tax.reference != reference {
                    return Err(TxError::UntrustedTaxReference);
                }
                Ok(ValidatedDelivery::Transfer {
                    from,
                    to,
                    amount: data.amount,
                    tax: tax.policy,
                })
            }
        }
    }
}
