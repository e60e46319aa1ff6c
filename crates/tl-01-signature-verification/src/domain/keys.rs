//! # Key Material
//!
//! Signing side of the identity model, used by clients and tests to produce
//! signatures the ledger will accept. The node itself never holds a
//! signing key.

use super::identity::Identity;
use ed25519_dalek::{Signer, SigningKey};
use rand::rngs::OsRng;
use zeroize::Zeroizing;

/// An Ed25519 keypair.
///
/// The secret scalar is wiped when the key is dropped (`SigningKey`
/// zeroizes itself).
pub struct SigningIdentity {
    signing_key: SigningKey,
}

impl SigningIdentity {
    /// Generate a random keypair from the OS RNG.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut OsRng),
        }
    }

    /// Create from a 32-byte secret seed.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(&seed),
        }
    }

    /// The public identity for this key.
    pub fn identity(&self) -> Identity {
        Identity::from(self.signing_key.verifying_key())
    }

    /// Sign raw bytes (deterministic, no RNG).
    pub fn sign(&self, message: &[u8]) -> [u8; 64] {
        self.signing_key.sign(message).to_bytes()
    }

    /// Export the secret seed; the buffer is wiped when dropped.
    pub fn to_seed(&self) -> Zeroizing<[u8; 32]> {
        Zeroizing::new(self.signing_key.to_bytes())
    }
}

impl std::fmt::Debug for SigningIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningIdentity")
            .field("identity", &self.identity())
            .finish_non_exhaustive()
    }
}
