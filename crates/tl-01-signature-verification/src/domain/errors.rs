//! # Signature Errors
//!
//! Decoding failures for identity and signature bytes. A well-formed but
//! non-matching signature is not an error; `verify` returns `Ok(false)`.

use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// The bytes are not a valid Ed25519 public key.
    #[error("The public key is not a valid Ed25519 identity")]
    MalformedIdentity,

    /// The bytes are not a 64-byte Ed25519 signature.
    #[error("The signature's format is not correct")]
    MalformedSignature,
}
