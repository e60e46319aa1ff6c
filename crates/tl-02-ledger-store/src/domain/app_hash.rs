use sha2::{Digest, Sha256};
use shared_types::Hash;

const APP_HASH_DOMAIN: &[u8] = b"tl/app-hash/v1";

/// Chained commitment over one committed block.
///
/// `SHA-256(domain || previous || height || size_counter || writes)` where
/// integers are big-endian and each written key and value is prefixed with
/// its length as a big-endian `u64`. `writes` must be in ascending key order;
/// the ledger passes them straight out of a `BTreeMap`.
pub fn compute_app_hash(
    previous: &Hash,
    height: u64,
    size_counter: u64,
    writes: &[(Vec<u8>, Vec<u8>)],
) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(APP_HASH_DOMAIN);
    hasher.update(previous);
    hasher.update(height.to_be_bytes());
    hasher.update(size_counter.to_be_bytes());
    for (key, value) in writes {
        hasher.update((key.len() as u64).to_be_bytes());
        hasher.update(key);
        hasher.update((value.len() as u64).to_be_bytes());
        hasher.update(value);
    }
    hasher.finalize().into()
}
