//! Transaction wire types.
//!
//! ```json
//! {
//!   "signature": "<hex>",
//!   "submittedAt": 1700000000000,
//!   "data": {
//!     "from": "<hex>", "action": "send", "to": "<hex>",
//!     "taxReference": "<content address>", "amount": "111"
//!   }
//! }
//! ```
//!
//! The signature covers [`DeliveryData::signing_bytes`] only.

use crate::domain::errors::TxError;
use serde::{Deserialize, Serialize};
use shared_types::{Amount, HexBytes, Timestamp};
use tl_01_signature_verification::{CanonicalEncoder, Identity, SigningIdentity};

const DELIVERY_DOMAIN: &str = "tl/delivery/v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Mint into `from` (inflators only).
    Add,
    /// Burn from `from` (inflators only).
    Remove,
    /// Transfer from `from` to `to`, taxed.
    Send,
}

impl Action {
    fn tag(self) -> u8 {
        match self {
            Action::Add => 1,
            Action::Remove => 2,
            Action::Send => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryData {
    pub from: HexBytes,
    pub action: Action,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<HexBytes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_reference: Option<String>,
    pub amount: Amount,
}

impl DeliveryData {
    pub fn add(from: Identity, amount: Amount) -> Self {
        Self {
            from: HexBytes::from(*from.as_bytes()),
            action: Action::Add,
            to: None,
            tax_reference: None,
            amount,
        }
    }

    pub fn remove(from: Identity, amount: Amount) -> Self {
        Self {
            action: Action::Remove,
            ..Self::add(from, amount)
        }
    }

    pub fn send(
        from: Identity,
        to: Identity,
        tax_reference: impl Into<String>,
        amount: Amount,
    ) -> Self {
        Self {
            from: HexBytes::from(*from.as_bytes()),
            action: Action::Send,
            to: Some(HexBytes::from(*to.as_bytes())),
            tax_reference: Some(tax_reference.into()),
            amount,
        }
    }

    /// The exact bytes a sender signs.
    pub fn signing_bytes(&self) -> Vec<u8> {
        CanonicalEncoder::new(DELIVERY_DOMAIN)
            .bytes(self.from.as_slice())
            .u8(self.action.tag())
            .optional(self.to.as_ref(), |e, to| e.bytes(to.as_slice()))
            .optional(self.tax_reference.as_deref(), |e, r| e.str(r))
            .i64(self.amount.minor())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryRequest {
    pub signature: HexBytes,
    pub submitted_at: Timestamp,
    pub data: DeliveryData,
}

impl DeliveryRequest {
    /// Sign `data` with `signer`. `data.from` should be `signer`'s identity.
    pub fn sign(data: DeliveryData, signer: &SigningIdentity, submitted_at: Timestamp) -> Self {
        let signature = signer.sign(&data.signing_bytes());
        Self {
            signature: HexBytes::from(signature),
            submitted_at,
            data,
        }
    }

    pub fn decode(raw: &[u8]) -> Result<Self, TxError> {
        serde_json::from_slice(raw).map_err(|e| TxError::Malformed(e.to_string()))
    }

    pub fn encode(&self) -> Result<Vec<u8>, TxError> {
        serde_json::to_vec(self).map_err(|e| TxError::Malformed(e.to_string()))
    }
}
