//! # Node Runtime Library
//!
//! Process wiring for a TaxLedger node, exposed as a library so the pieces
//! can be tested without starting the binary.
//!
//! ## Modules
//!
//! - `container/` - configuration and startup bootstrap
//! - `server/` - newline-delimited JSON frame server over TCP
//! - `demo_keys` - local test network key and registry generation
//! - `runtime` - the long-running node: bind, serve, shut down

pub mod container;
pub mod demo_keys;
pub mod runtime;
pub mod server;

pub use container::{load_config, ConfigError, NodeConfig};
pub use demo_keys::{create_demo_keys, DemoKeys};
pub use runtime::NodeRuntime;
pub use server::FrameServer;
