use crate::domain::{
    ApplicationError, ResponseCheckTx, ResponseCommit, ResponseDeliverTx, ResponseInfo,
    ResponseQuery,
};

/// Operations the consensus engine invokes.
///
/// `check_tx`, `deliver_tx` and `commit` are called sequentially. `query`
/// and `info` may be called from other threads.
pub trait ConsensusApplication: Send + Sync {
    fn info(&self) -> ResponseInfo;

    fn check_tx(&self, tx: &[u8]) -> ResponseCheckTx;

    fn deliver_tx(&self, tx: &[u8]) -> ResponseDeliverTx;

    /// An error means durability could not be guaranteed; the node must stop.
    fn commit(&self) -> Result<ResponseCommit, ApplicationError>;

    fn query(&self, data: &[u8]) -> ResponseQuery;
}
