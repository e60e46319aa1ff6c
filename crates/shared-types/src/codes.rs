//! # Response Codes
//!
//! Numeric codes returned to the consensus engine. The values are part of
//! the wire contract with existing clients and must never be renumbered.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result code attached to every boundary response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum ResponseCode {
    /// Validation and application completed.
    Ok,
    /// Unparsable request body, malformed identity or signature bytes.
    EncodingError,
    /// Reserved: nonce tracking is not enforced by the ledger.
    BadNonce,
    /// Policy or business-rule violation.
    Unauthorized,
    /// Reserved for client-side transport failures; never raised by the node.
    ClientError,
    /// The backing store failed while serving the request.
    Internal,
}

impl ResponseCode {
    pub const fn as_u32(self) -> u32 {
        match self {
            ResponseCode::Ok => 0,
            ResponseCode::EncodingError => 1,
            ResponseCode::BadNonce => 2,
            ResponseCode::Unauthorized => 3,
            ResponseCode::ClientError => 4,
            ResponseCode::Internal => 5,
        }
    }

    pub const fn is_ok(self) -> bool {
        matches!(self, ResponseCode::Ok)
    }
}

impl From<ResponseCode> for u32 {
    fn from(code: ResponseCode) -> Self {
        code.as_u32()
    }
}

impl TryFrom<u32> for ResponseCode {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ResponseCode::Ok),
            1 => Ok(ResponseCode::EncodingError),
            2 => Ok(ResponseCode::BadNonce),
            3 => Ok(ResponseCode::Unauthorized),
            4 => Ok(ResponseCode::ClientError),
            5 => Ok(ResponseCode::Internal),
            other => Err(format!("unknown response code {other}")),
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResponseCode::Ok => "ok",
            ResponseCode::EncodingError => "encoding_error",
            ResponseCode::BadNonce => "bad_nonce",
            ResponseCode::Unauthorized => "unauthorized",
            ResponseCode::ClientError => "client_error",
            ResponseCode::Internal => "internal",
        };
        f.write_str(name)
    }
}
