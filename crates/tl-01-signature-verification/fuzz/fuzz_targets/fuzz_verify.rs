//! Fuzz target for Ed25519 verification over untrusted request bytes.
//!
//! Identity and signature bytes arrive straight from client JSON, so the
//! decoder must classify every input without panicking.
//!
//! ## Running
//!
//! ```bash
//! cd crates/tl-01-signature-verification
//! cargo +nightly fuzz run fuzz_verify
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use tl_01_signature_verification::{verify, SignatureError};

#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput {
    identity: Vec<u8>,
    signature: Vec<u8>,
    payload: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    let result = verify(&input.identity, &input.signature, &input.payload);

    // Deterministic across calls.
    let again = verify(&input.identity, &input.signature, &input.payload);
    assert_eq!(result, again);

    match result {
        Err(SignatureError::MalformedIdentity) => assert!(
            input.identity.len() != 32
                || tl_01_signature_verification::Identity::from_bytes(&input.identity).is_err()
        ),
        Err(SignatureError::MalformedSignature) => assert_ne!(input.signature.len(), 64),
        Ok(_) => {
            assert_eq!(input.identity.len(), 32);
            assert_eq!(input.signature.len(), 64);
        }
    }
});
