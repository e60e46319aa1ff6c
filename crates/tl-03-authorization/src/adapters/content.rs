//! [`ContentStore`] adapters.

use crate::domain::errors::LoadError;
use crate::ports::outbound::ContentStore;
use parking_lot::RwLock;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Lowercase hex SHA-256 of `bytes`.
pub fn content_address(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

fn check_address(address: &str) -> Result<(), LoadError> {
    let well_formed = address.len() == 64
        && address
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
    if well_formed {
        Ok(())
    } else {
        Err(LoadError::InvalidAddress(address.to_string()))
    }
}

fn verified(address: &str, bytes: Vec<u8>) -> Result<Vec<u8>, LoadError> {
    if content_address(&bytes) != address {
        return Err(LoadError::DigestMismatch {
            address: address.to_string(),
        });
    }
    Ok(bytes)
}

/// Objects stored as files named by their address inside one directory.
#[derive(Debug, Clone)]
pub struct DirectoryContentStore {
    root: PathBuf,
}

impl DirectoryContentStore {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ContentStore for DirectoryContentStore {
    fn fetch(&self, address: &str) -> Result<Vec<u8>, LoadError> {
        check_address(address)?;
        let path = self.root.join(address);
        let bytes = std::fs::read(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => LoadError::NotFound(address.to_string()),
            _ => LoadError::Io {
                address: address.to_string(),
                message: e.to_string(),
            },
        })?;
        verified(address, bytes)
    }

    fn put(&self, bytes: &[u8]) -> Result<String, LoadError> {
        let address = content_address(bytes);
        let io = |e: std::io::Error| LoadError::Io {
            address: address.clone(),
            message: e.to_string(),
        };
        std::fs::create_dir_all(&self.root).map_err(io)?;
        std::fs::write(self.root.join(&address), bytes).map_err(io)?;
        tracing::debug!("[tl-03] Stored {} bytes as {}", bytes.len(), address);
        Ok(address)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryContentStore {
    objects: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store bytes under an arbitrary address, bypassing digest computation.
    #[cfg(test)]
    pub(crate) fn insert_raw(&self, address: &str, bytes: &[u8]) {
        self.objects.write().insert(address.to_string(), bytes.to_vec());
    }
}

impl ContentStore for InMemoryContentStore {
    fn fetch(&self, address: &str) -> Result<Vec<u8>, LoadError> {
        check_address(address)?;
        let bytes = self
            .objects
            .read()
            .get(address)
            .cloned()
            .ok_or_else(|| LoadError::NotFound(address.to_string()))?;
        verified(address, bytes)
    }

    fn put(&self, bytes: &[u8]) -> Result<String, LoadError> {
        let address = content_address(bytes);
        self.objects.write().insert(address.clone(), bytes.to_vec());
        Ok(address)
    }
}
