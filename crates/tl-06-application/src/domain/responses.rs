//! Boundary responses, serialized as JSON by the node driver.

use serde::{Deserialize, Serialize};
use shared_types::{HexBytes, ResponseCode};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseCheckTx {
    pub code: ResponseCode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseDeliverTx {
    pub code: ResponseCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<String>,
}

impl ResponseDeliverTx {
    pub fn ok() -> Self {
        Self {
            code: ResponseCode::Ok,
            log: None,
        }
    }

    pub fn rejected(code: ResponseCode, log: impl Into<String>) -> Self {
        Self {
            code,
            log: Some(log.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseQuery {
    pub code: ResponseCode,
    /// `{"balance": "<decimal>"}` on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<HexBytes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<String>,
}

impl ResponseQuery {
    pub fn rejected(code: ResponseCode, log: impl Into<String>) -> Self {
        Self {
            code,
            value: None,
            log: Some(log.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseCommit {
    pub app_hash: HexBytes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseInfo {
    pub last_block_height: u64,
    pub last_block_app_hash: HexBytes,
}
