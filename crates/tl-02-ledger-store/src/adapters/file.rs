use crate::adapters::memory::{apply_batch, scan};
use crate::domain::errors::KVStoreError;
use crate::ports::database::{BatchOperation, KeyValueStore, ScanResult};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File-backed key-value store.
///
/// The whole map is held in memory and rewritten to disk on every write via
/// a temp file, `fsync` and rename, so a crash leaves either the old or the
/// new file in place. On-disk format is a sequence of
/// `[key_len:u32 LE][key][value_len:u32 LE][value]` entries.
pub struct FileBackedKVStore {
    data: BTreeMap<Vec<u8>, Vec<u8>>,
    path: PathBuf,
}

fn io_error(e: std::io::Error) -> KVStoreError {
    KVStoreError::IOError {
        message: e.to_string(),
    }
}

impl FileBackedKVStore {
    /// Open the store at `path`, creating an empty one if the file is absent.
    ///
    /// A truncated or malformed file is reported as
    /// [`KVStoreError::CorruptionError`] rather than silently discarded.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, KVStoreError> {
        let path = path.as_ref().to_path_buf();

        let data = match std::fs::read(&path) {
            Ok(bytes) => {
                let data = Self::decode(&bytes)?;
                tracing::info!(
                    "[tl-02] 💾 Loaded {} keys from {} ({} bytes)",
                    data.len(),
                    path.display(),
                    bytes.len()
                );
                data
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("[tl-02] 📁 No existing storage file at {}", path.display());
                BTreeMap::new()
            }
            Err(e) => return Err(io_error(e)),
        };

        Ok(Self { data, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn decode(bytes: &[u8]) -> Result<BTreeMap<Vec<u8>, Vec<u8>>, KVStoreError> {
        let mut data = BTreeMap::new();
        let mut cursor = 0;

        let take = |cursor: &mut usize| -> Result<Vec<u8>, KVStoreError> {
            let truncated = || KVStoreError::CorruptionError {
                message: format!("truncated entry at offset {}", *cursor),
            };
            let len_bytes: [u8; 4] = bytes
                .get(*cursor..*cursor + 4)
                .and_then(|s| s.try_into().ok())
                .ok_or_else(truncated)?;
            let len = u32::from_le_bytes(len_bytes) as usize;
            let start = *cursor + 4;
            let field = bytes.get(start..start + len).ok_or_else(truncated)?;
            *cursor = start + len;
            Ok(field.to_vec())
        };

        while cursor < bytes.len() {
            let key = take(&mut cursor)?;
            let value = take(&mut cursor)?;
            data.insert(key, value);
        }

        Ok(data)
    }

    fn encode(data: &BTreeMap<Vec<u8>, Vec<u8>>) -> Vec<u8> {
        let mut bytes = Vec::new();
        for (key, value) in data {
            bytes.extend_from_slice(&(key.len() as u32).to_le_bytes());
            bytes.extend_from_slice(key);
            bytes.extend_from_slice(&(value.len() as u32).to_le_bytes());
            bytes.extend_from_slice(value);
        }
        bytes
    }

    fn save(&self, data: &BTreeMap<Vec<u8>, Vec<u8>>) -> Result<(), KVStoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(io_error)?;
            }
        }

        let temp_path = self.path.with_extension("tmp");
        let mut file = std::fs::File::create(&temp_path).map_err(io_error)?;
        file.write_all(&Self::encode(data)).map_err(io_error)?;
        file.sync_all().map_err(io_error)?;
        std::fs::rename(&temp_path, &self.path).map_err(io_error)?;

        Ok(())
    }

    /// Persist `next` and only then make it the in-memory view.
    fn replace(&mut self, next: BTreeMap<Vec<u8>, Vec<u8>>) -> Result<(), KVStoreError> {
        self.save(&next)?;
        self.data = next;
        Ok(())
    }
}

impl KeyValueStore for FileBackedKVStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError> {
        Ok(self.data.get(key).cloned())
    }

    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), KVStoreError> {
        let mut next = self.data.clone();
        apply_batch(&mut next, operations);
        self.replace(next)
    }

    fn prefix_scan(&self, prefix: &[u8]) -> Result<ScanResult, KVStoreError> {
        Ok(scan(&self.data, prefix))
    }
}
