//! # Ed25519 Verification
//!
//! `verify` is the single contract the validators rely on:
//!
//! - identity bytes that do not decode fail with `MalformedIdentity`
//! - signature bytes that do not parse fail with `MalformedSignature`
//! - otherwise the result says whether the signature is valid over the
//!   exact payload bytes

use super::errors::SignatureError;
use super::identity::Identity;
use crate::ports::inbound::SignatureVerificationApi;
use ed25519_dalek::Signature;

/// Length of an encoded signature in bytes.
pub const SIGNATURE_LENGTH: usize = 64;

/// Verify an Ed25519 signature over `payload`.
pub fn verify(identity: &[u8], signature: &[u8], payload: &[u8]) -> Result<bool, SignatureError> {
    let identity = Identity::from_bytes(identity)?;
    let signature =
        Signature::from_slice(signature).map_err(|_| SignatureError::MalformedSignature)?;
    let key = identity.verifying_key()?;
    Ok(key.verify_strict(payload, &signature).is_ok())
}

/// Stateless verifier backing `SignatureVerificationApi`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519Verifier;

impl Ed25519Verifier {
    pub fn new() -> Self {
        Self
    }
}

impl SignatureVerificationApi for Ed25519Verifier {
    fn verify(
        &self,
        identity: &[u8],
        signature: &[u8],
        payload: &[u8],
    ) -> Result<bool, SignatureError> {
        verify(identity, signature, payload)
    }
}
