//! # Identity
//!
//! An account handle and authorization token in one: the raw 32-byte
//! Ed25519 public key. There is no account-creation step; the first
//! reference to an identity implicitly addresses a zero-balance account.

use super::errors::SignatureError;
use ed25519_dalek::VerifyingKey;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;

/// Length of an encoded identity in bytes.
pub const IDENTITY_LENGTH: usize = 32;

/// A validated Ed25519 public key.
///
/// Construction always checks that the bytes decode to a curve point, so an
/// `Identity` in hand is known to be usable for verification.
/// Serializes as its lowercase hex string.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, SerializeDisplay, DeserializeFromStr,
)]
pub struct Identity([u8; IDENTITY_LENGTH]);

impl Identity {
    /// Decode and validate identity bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SignatureError> {
        let raw: [u8; IDENTITY_LENGTH] = bytes
            .try_into()
            .map_err(|_| SignatureError::MalformedIdentity)?;
        VerifyingKey::from_bytes(&raw).map_err(|_| SignatureError::MalformedIdentity)?;
        Ok(Self(raw))
    }

    pub fn from_hex(s: &str) -> Result<Self, SignatureError> {
        let bytes = hex::decode(s).map_err(|_| SignatureError::MalformedIdentity)?;
        Self::from_bytes(&bytes)
    }

    /// Canonical byte encoding, used in store keys and signed payloads.
    pub fn as_bytes(&self) -> &[u8; IDENTITY_LENGTH] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub(crate) fn verifying_key(&self) -> Result<VerifyingKey, SignatureError> {
        VerifyingKey::from_bytes(&self.0).map_err(|_| SignatureError::MalformedIdentity)
    }
}

impl From<VerifyingKey> for Identity {
    fn from(key: VerifyingKey) -> Self {
        Self(key.to_bytes())
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identity({}..)", &self.to_hex()[..12])
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Identity {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
