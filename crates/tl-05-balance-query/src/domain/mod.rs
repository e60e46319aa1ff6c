pub mod errors;
pub mod query;
pub mod validator;

pub use errors::QueryError;
pub use query::{QueryData, QueryRequest, QueryResponse};
pub use validator::{FreshnessPolicy, QueryValidator};
