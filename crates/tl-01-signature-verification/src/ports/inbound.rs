//! # Inbound Ports (Driving Ports / API)

use crate::domain::errors::SignatureError;
use crate::domain::identity::Identity;

/// Signature verification as seen by the request validators.
///
/// Implementations must be deterministic: the same bytes yield the same
/// answer on every replica.
pub trait SignatureVerificationApi: Send + Sync {
    /// Check `signature` over `payload` for the key encoded in `identity`.
    ///
    /// # Errors
    /// * `MalformedIdentity` - `identity` does not decode to a public key
    /// * `MalformedSignature` - `signature` cannot be parsed
    fn verify(
        &self,
        identity: &[u8],
        signature: &[u8],
        payload: &[u8],
    ) -> Result<bool, SignatureError>;

    /// Decode identity bytes without checking any signature.
    fn decode_identity(&self, identity: &[u8]) -> Result<Identity, SignatureError> {
        Identity::from_bytes(identity)
    }
}
