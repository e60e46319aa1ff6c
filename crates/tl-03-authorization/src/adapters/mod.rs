pub mod content;

pub use content::{content_address, DirectoryContentStore, InMemoryContentStore};
