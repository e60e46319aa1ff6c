//! Startup wiring: registry documents, ledger store, application facade.

use super::config::{ConfigError, NodeConfig, StorageBackend};
use std::sync::Arc;
use thiserror::Error;
use tl_02_ledger_store::{FileBackedKVStore, KVStoreError};
use tl_03_authorization::{
    AuthorizationRegistry, DirectoryContentStore, LoadError, RegistryLoader,
};
use tl_06_application::{Application, ApplicationError, ConsensusApplication};
use tracing::info;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("registry: {0}")]
    Registry(#[from] LoadError),

    #[error("storage: {0}")]
    Storage(#[from] KVStoreError),

    #[error("application: {0}")]
    Application(#[from] ApplicationError),

    #[error("cannot create {path}: {message}")]
    DataDir { path: String, message: String },

    #[error("storage backend {0:?} is not compiled in (enable the `rocksdb` feature)")]
    BackendUnavailable(StorageBackend),
}

/// Fetch and validate the inflator, watcher and tax documents.
pub fn load_registry(config: &NodeConfig) -> Result<AuthorizationRegistry, BootstrapError> {
    let addresses = config.registry.addresses()?;
    let loader = RegistryLoader::new(DirectoryContentStore::new(&config.registry.content_dir));
    let source = loader.load(&addresses)?;
    let registry = AuthorizationRegistry::from_source(&source)?;
    info!(
        "[node] Registry loaded from {} (tax reference {})",
        config.registry.content_dir.display(),
        addresses.tax
    );
    Ok(registry)
}

/// Open the configured ledger store and build the application on it.
pub fn open_application(
    config: &NodeConfig,
    registry: Arc<AuthorizationRegistry>,
) -> Result<Arc<dyn ConsensusApplication>, BootstrapError> {
    let data_dir = &config.storage.data_dir;
    std::fs::create_dir_all(data_dir).map_err(|e| BootstrapError::DataDir {
        path: data_dir.display().to_string(),
        message: e.to_string(),
    })?;

    let app_config = config.application_config();
    let app: Arc<dyn ConsensusApplication> = match config.storage.backend {
        StorageBackend::File => {
            let store = FileBackedKVStore::open(config.storage.ledger_file())?;
            Arc::new(Application::open(store, registry, app_config)?)
        }
        #[cfg(feature = "rocksdb")]
        StorageBackend::RocksDb => {
            let store =
                tl_02_ledger_store::RocksDbStore::open_default(config.storage.rocksdb_dir())?;
            Arc::new(Application::open(store, registry, app_config)?)
        }
        #[cfg(not(feature = "rocksdb"))]
        backend @ StorageBackend::RocksDb => {
            return Err(BootstrapError::BackendUnavailable(backend));
        }
    };

    let info = app.info();
    info!(
        "[node] Ledger opened at height {} (app hash {})",
        info.last_block_height, info.last_block_app_hash
    );
    Ok(app)
}
