//! # Signature Verification (TL-01)
//!
//! Identity model and signature checking for the ledger. Every other
//! component trusts a request only after it passes through this crate.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): identities, canonical payload encoding,
//!   Ed25519 verification, key material. Pure, no I/O.
//! - **Ports Layer** (`ports/`): the `SignatureVerificationApi` seam the
//!   validators are generic over.
//!
//! ## Security Notes
//!
//! - Verification uses `verify_strict`, which rejects small-order keys and
//!   non-canonical `S` scalars, so all replicas accept exactly the same set
//!   of signatures.
//! - Signatures always cover the `CanonicalEncoder` output, never a
//!   serializer's incidental byte layout.

pub mod domain;
pub mod ports;

pub use domain::canonical::CanonicalEncoder;
pub use domain::ed25519::{verify, Ed25519Verifier, SIGNATURE_LENGTH};
pub use domain::errors::SignatureError;
pub use domain::identity::{Identity, IDENTITY_LENGTH};
pub use domain::keys::SigningIdentity;
pub use ports::inbound::SignatureVerificationApi;
