pub mod errors;
pub mod responses;

pub use errors::ApplicationError;
pub use responses::{
    ResponseCheckTx, ResponseCommit, ResponseDeliverTx, ResponseInfo, ResponseQuery,
};
