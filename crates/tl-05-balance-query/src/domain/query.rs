//! Query wire types.
//!
//! ```json
//! {
//!   "signature": "<hex>",
//!   "data": {
//!     "from": "<hex>", "requestedAt": 1700000000000,
//!     "nonce": "8f1c", "onBehalfOf": "<hex>"
//!   }
//! }
//! ```
//!
//! The response value is `{"balance": "<decimal>"}`.

use crate::domain::errors::QueryError;
use serde::{Deserialize, Serialize};
use shared_types::{Amount, HexBytes, Timestamp};
use tl_01_signature_verification::{CanonicalEncoder, Identity, SigningIdentity};

const QUERY_DOMAIN: &str = "tl/query/v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryData {
    pub from: HexBytes,
    pub requested_at: Timestamp,
    pub nonce: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_behalf_of: Option<HexBytes>,
}

impl QueryData {
    /// Ask for `from`'s own balance.
    pub fn own(from: Identity, requested_at: Timestamp, nonce: impl Into<String>) -> Self {
        Self {
            from: HexBytes::from(*from.as_bytes()),
            requested_at,
            nonce: nonce.into(),
            on_behalf_of: None,
        }
    }

    /// Ask, as a watcher, for `target`'s balance.
    pub fn on_behalf_of(
        from: Identity,
        target: Identity,
        requested_at: Timestamp,
        nonce: impl Into<String>,
    ) -> Self {
        Self {
            on_behalf_of: Some(HexBytes::from(*target.as_bytes())),
            ..Self::own(from, requested_at, nonce)
        }
    }

    pub fn signing_bytes(&self) -> Vec<u8> {
        CanonicalEncoder::new(QUERY_DOMAIN)
            .bytes(self.from.as_slice())
            .u64(self.requested_at)
            .str(&self.nonce)
            .optional(self.on_behalf_of.as_ref(), |e, target| e.bytes(target.as_slice()))
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub signature: HexBytes,
    pub data: QueryData,
}

impl QueryRequest {
    pub fn sign(data: QueryData, signer: &SigningIdentity) -> Self {
        Self {
            signature: HexBytes::from(signer.sign(&data.signing_bytes())),
            data,
        }
    }

    pub fn decode(raw: &[u8]) -> Result<Self, QueryError> {
        serde_json::from_slice(raw).map_err(|e| QueryError::Malformed(e.to_string()))
    }

    pub fn encode(&self) -> Result<Vec<u8>, QueryError> {
        serde_json::to_vec(self).map_err(|e| QueryError::Malformed(e.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub balance: Amount,
}

impl QueryResponse {
    pub fn encode(&self) -> Result<Vec<u8>, QueryError> {
        serde_json::to_vec(self).map_err(|e| QueryError::Malformed(e.to_string()))
    }

    pub fn decode(raw: &[u8]) -> Result<Self, QueryError> {
        serde_json::from_slice(raw).map_err(|e| QueryError::Malformed(e.to_string()))
    }
}
