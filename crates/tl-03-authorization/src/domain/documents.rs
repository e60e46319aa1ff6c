//! Registry document formats.
//!
//! Identity lists: `[{"PublicKeyHex": "<hex>"}, ...]`
//!
//! Tax policy: `{"Percentage": 10, "PublicKeyHex": "<hex>"}`

use crate::domain::errors::LoadError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEntry {
    #[serde(rename = "PublicKeyHex")]
    pub public_key_hex: String,
}

impl KeyEntry {
    pub fn new(public_key_hex: impl Into<String>) -> Self {
        Self {
            public_key_hex: public_key_hex.into(),
        }
    }

    pub fn parse_list(document: &'static str, bytes: &[u8]) -> Result<Vec<Self>, LoadError> {
        serde_json::from_slice(bytes).map_err(|e| LoadError::MalformedDocument {
            document,
            reason: e.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxDocument {
    /// Signed so that an out-of-range value is reported rather than failing to parse.
    #[serde(rename = "Percentage")]
    pub percentage: i64,
    #[serde(rename = "PublicKeyHex")]
    pub public_key_hex: String,
}

impl TaxDocument {
    pub fn parse(bytes: &[u8]) -> Result<Self, LoadError> {
        serde_json::from_slice(bytes).map_err(|e| LoadError::MalformedDocument {
            document: "tax",
            reason: e.to_string(),
        })
    }
}
