pub mod outbound;

pub use outbound::{BalanceReader, TimeSource};
