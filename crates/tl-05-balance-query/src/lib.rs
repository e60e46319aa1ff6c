//! # tl-05-balance-query
//!
//! Answers signed balance queries from committed state.
//!
//! A query is accepted only if it is fresh (`requestedAt` within the
//! configured window of the local clock), the sender is a watcher when
//! asking about another identity, and the signature is valid. The `nonce`
//! is signed but not tracked; the freshness window bounds replay.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::{ManualTimeSource, SystemTimeSource};
pub use domain::{
    FreshnessPolicy, QueryData, QueryError, QueryRequest, QueryResponse, QueryValidator,
};
pub use ports::{BalanceReader, TimeSource};
pub use service::BalanceQueryService;
