//! # Demo Keys
//!
//! Generates one inflator, one watcher and one tax receiver, publishes the
//! three registry documents into a content directory and writes each
//! keypair to `<keys_dir>/<role>.json`. Meant for local test networks.

use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tl_01_signature_verification::SigningIdentity;
use tl_03_authorization::{
    ContentStore, DirectoryContentStore, KeyEntry, LoadError, RegistryAddresses, TaxDocument,
};
use tracing::info;
use zeroize::Zeroizing;

#[derive(Debug, Error)]
pub enum DemoKeysError {
    #[error("tax percentage {0} is outside 0..=100")]
    Percentage(i64),

    #[error("publishing registry document: {0}")]
    Publish(#[from] LoadError),

    #[error("encoding {1}: {0}")]
    Encode(serde_json::Error, &'static str),

    #[error("writing {}: {message}", path.display())]
    Write { path: PathBuf, message: String },
}

/// Keys and document addresses produced by [`create_demo_keys`].
#[derive(Debug)]
pub struct DemoKeys {
    pub inflator: SigningIdentity,
    pub watcher: SigningIdentity,
    pub tax_receiver: SigningIdentity,
    pub addresses: RegistryAddresses,
}

impl DemoKeys {
    /// Shell lines that point a node at the published documents.
    pub fn env_lines(&self) -> String {
        format!(
            "TL_INFLATORS={}\nTL_WATCHERS={}\nTL_TAX={}\n",
            self.addresses.inflators, self.addresses.watchers, self.addresses.tax
        )
    }
}

#[derive(Serialize)]
struct KeyFile<'a> {
    #[serde(rename = "PublicKeyHex")]
    public_key_hex: String,
    #[serde(rename = "PrivateKeyHex")]
    private_key_hex: &'a str,
}

fn write_key(keys_dir: &Path, role: &str, key: &SigningIdentity) -> Result<(), DemoKeysError> {
    let path = keys_dir.join(format!("{role}.json"));
    let failed = |message: String| DemoKeysError::Write {
        path: path.clone(),
        message,
    };

    let seed = Zeroizing::new(hex::encode(&*key.to_seed()));
    let file = KeyFile {
        public_key_hex: key.identity().to_hex(),
        private_key_hex: seed.as_str(),
    };
    let json = Zeroizing::new(
        serde_json::to_vec_pretty(&file).map_err(|e| DemoKeysError::Encode(e, "key file"))?,
    );
    std::fs::write(&path, json.as_slice()).map_err(|e| failed(e.to_string()))?;
    info!("[node] 🔑 Wrote {} key to {}", role, path.display());
    Ok(())
}

fn publish_list(
    store: &DirectoryContentStore,
    key: &SigningIdentity,
) -> Result<String, DemoKeysError> {
    let entries = vec![KeyEntry::new(key.identity().to_hex())];
    let bytes = serde_json::to_vec(&entries).map_err(|e| DemoKeysError::Encode(e, "key list"))?;
    Ok(store.put(&bytes)?)
}

pub fn create_demo_keys(
    content_dir: &Path,
    keys_dir: &Path,
    percentage: i64,
) -> Result<DemoKeys, DemoKeysError> {
    if !(0..=100).contains(&percentage) {
        return Err(DemoKeysError::Percentage(percentage));
    }
    std::fs::create_dir_all(keys_dir).map_err(|e| DemoKeysError::Write {
        path: keys_dir.to_path_buf(),
        message: e.to_string(),
    })?;

    let inflator = SigningIdentity::generate();
    let watcher = SigningIdentity::generate();
    let tax_receiver = SigningIdentity::generate();

    let store = DirectoryContentStore::new(content_dir);
    let tax_document = TaxDocument {
        percentage,
        public_key_hex: tax_receiver.identity().to_hex(),
    };
    let tax_bytes =
        serde_json::to_vec(&tax_document).map_err(|e| DemoKeysError::Encode(e, "tax document"))?;
    let addresses = RegistryAddresses {
        inflators: publish_list(&store, &inflator)?,
        watchers: publish_list(&store, &watcher)?,
        tax: store.put(&tax_bytes)?,
    };

    write_key(keys_dir, "inflator", &inflator)?;
    write_key(keys_dir, "watcher", &watcher)?;
    write_key(keys_dir, "tax", &tax_receiver)?;

    info!(
        "[node] Published demo registry to {} ({}% tax)",
        content_dir.display(),
        percentage
    );
    Ok(DemoKeys {
        inflator,
        watcher,
        tax_receiver,
        addresses,
    })
}
