use crate::domain::errors::LoadError;

/// Content-addressed object store holding registry documents.
///
/// Addresses are the lowercase hex SHA-256 of the object bytes.
pub trait ContentStore: Send + Sync {
    /// Fetch an object, verifying that its bytes match `address`.
    fn fetch(&self, address: &str) -> Result<Vec<u8>, LoadError>;

    /// Store an object and return its address.
    fn put(&self, bytes: &[u8]) -> Result<String, LoadError>;
}
