//! Storage adapters implementing [`KeyValueStore`](crate::ports::KeyValueStore).

pub mod file;
pub mod memory;
#[cfg(feature = "rocksdb")]
pub mod rocks;

pub use file::FileBackedKVStore;
pub use memory::InMemoryKVStore;
#[cfg(feature = "rocksdb")]
pub use rocks::{RocksDbConfig, RocksDbStore};
