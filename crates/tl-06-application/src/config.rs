use std::time::Duration;
use tl_05_balance_query::FreshnessPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplicationConfig {
    /// Oldest accepted query (default 5s).
    pub query_max_age: Duration,
    /// Furthest accepted future-dated query (default 5s).
    pub query_max_future_skew: Duration,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            query_max_age: Duration::from_secs(5),
            query_max_future_skew: Duration::from_secs(5),
        }
    }
}

impl ApplicationConfig {
    pub fn freshness(&self) -> FreshnessPolicy {
        FreshnessPolicy {
            max_age: self.query_max_age,
            max_future_skew: self.query_max_future_skew,
        }
    }
}
