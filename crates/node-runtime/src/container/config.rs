//! # Node Configuration
//!
//! Defaults overridden by `TL_*` environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tl_03_authorization::RegistryAddresses;
use tl_06_application::ApplicationConfig;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is required")]
    Missing { var: &'static str },

    #[error("{var}={value:?} is invalid: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Complete node configuration.
#[derive(Debug, Clone, Default)]
pub struct NodeConfig {
    pub network: NetworkConfig,
    pub storage: StorageConfig,
    pub registry: RegistryConfig,
    pub query: QueryConfig,
    /// `EnvFilter` directive for the log subscriber.
    pub log_level: LogLevel,
}

#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Socket the frame server binds.
    pub listen_addr: SocketAddr,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 46658)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    #[default]
    File,
    /// Only usable when built with the `rocksdb` feature.
    RocksDb,
}

impl std::str::FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file" => Ok(Self::File),
            "rocksdb" => Ok(Self::RocksDb),
            other => Err(format!("unknown backend {other:?}, expected \"file\" or \"rocksdb\"")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub backend: StorageBackend,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            backend: StorageBackend::File,
        }
    }
}

impl StorageConfig {
    /// File holding the file-backed ledger.
    pub fn ledger_file(&self) -> PathBuf {
        self.data_dir.join("ledger.db")
    }

    /// Directory holding the RocksDB ledger.
    pub fn rocksdb_dir(&self) -> PathBuf {
        self.data_dir.join("ledger-rocksdb")
    }
}

/// Where the registry documents live and which ones to load.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    pub content_dir: PathBuf,
    pub inflators: Option<String>,
    pub watchers: Option<String>,
    pub tax: Option<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("./content"),
            inflators: None,
            watchers: None,
            tax: None,
        }
    }
}

impl RegistryConfig {
    /// All three addresses, or the first one missing.
    pub fn addresses(&self) -> Result<RegistryAddresses, ConfigError> {
        let required = |value: &Option<String>, var: &'static str| {
            value.clone().ok_or(ConfigError::Missing { var })
        };
        Ok(RegistryAddresses {
            inflators: required(&self.inflators, "TL_INFLATORS")?,
            watchers: required(&self.watchers, "TL_WATCHERS")?,
            tax: required(&self.tax, "TL_TAX")?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct QueryConfig {
    /// Oldest accepted query in seconds.
    pub wait_secs: u64,
    /// Furthest accepted future-dated query in seconds.
    pub max_future_skew_secs: u64,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            wait_secs: 5,
            max_future_skew_secs: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLevel(pub String);

impl Default for LogLevel {
    fn default() -> Self {
        Self("info".to_string())
    }
}

impl NodeConfig {
    /// Apply overrides from `lookup`, which maps a variable name to its value.
    ///
    /// Unset variables keep their defaults. The registry addresses are not
    /// checked here so that `demo-keys` can run without them; see
    /// [`RegistryConfig::addresses`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("TL_LISTEN_ADDR") {
            config.network.listen_addr = parse("TL_LISTEN_ADDR", value)?;
        }
        if let Some(value) = lookup("TL_DATA_DIR") {
            config.storage.data_dir = PathBuf::from(value);
        }
        if let Some(value) = lookup("TL_STORAGE_BACKEND") {
            config.storage.backend = parse("TL_STORAGE_BACKEND", value)?;
        }
        if let Some(value) = lookup("TL_CONTENT_DIR") {
            config.registry.content_dir = PathBuf::from(value);
        }
        config.registry.inflators = lookup("TL_INFLATORS").filter(|v| !v.is_empty());
        config.registry.watchers = lookup("TL_WATCHERS").filter(|v| !v.is_empty());
        config.registry.tax = lookup("TL_TAX").filter(|v| !v.is_empty());
        if let Some(value) = lookup("TL_QUERY_WAIT_SECS") {
            config.query.wait_secs = parse("TL_QUERY_WAIT_SECS", value)?;
        }
        if let Some(value) = lookup("TL_QUERY_SKEW_SECS") {
            config.query.max_future_skew_secs = parse("TL_QUERY_SKEW_SECS", value)?;
        }
        if let Some(value) = lookup("TL_LOG_LEVEL") {
            config.log_level = LogLevel(value);
        }

        Ok(config)
    }

    pub fn application_config(&self) -> ApplicationConfig {
        ApplicationConfig {
            query_max_age: Duration::from_secs(self.query.wait_secs),
            query_max_future_skew: Duration::from_secs(self.query.max_future_skew_secs),
        }
    }
}

fn parse<T>(var: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        reason: e.to_string(),
        value,
    })
}

/// Load configuration from the process environment.
pub fn load_config() -> Result<NodeConfig, ConfigError> {
    NodeConfig::from_lookup(|key| std::env::var(key).ok())
}
