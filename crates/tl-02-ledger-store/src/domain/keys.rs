//! Key layout.
//!
//! | Key                         | Value                |
//! |-----------------------------|----------------------|
//! | `acct/` + 32-byte identity  | [`AccountRecord`]    |
//! | `meta/app-state`            | [`ApplicationState`] |
//!
//! All account keys share one prefix and a fixed length, so byte order of
//! keys equals byte order of identities.
//!
//! [`AccountRecord`]: super::AccountRecord
//! [`ApplicationState`]: super::ApplicationState

use tl_01_signature_verification::{Identity, IDENTITY_LENGTH};

pub const ACCOUNT_PREFIX: &[u8] = b"acct/";

pub const APP_STATE_KEY: &[u8] = b"meta/app-state";

pub fn account_key(identity: &Identity) -> Vec<u8> {
    let mut key = Vec::with_capacity(ACCOUNT_PREFIX.len() + IDENTITY_LENGTH);
    key.extend_from_slice(ACCOUNT_PREFIX);
    key.extend_from_slice(identity.as_bytes());
    key
}

/// Inverse of [`account_key`]. `None` for foreign keys or invalid identities.
pub fn identity_from_key(key: &[u8]) -> Option<Identity> {
    let raw = key.strip_prefix(ACCOUNT_PREFIX)?;
    Identity::from_bytes(raw).ok()
}
