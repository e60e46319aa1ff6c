//! # Wire Frames
//!
//! One JSON object per line in each direction.
//!
//! ```text
//! → {"method":"deliver_tx","tx":"<hex>"}
//! ← {"code":0}
//! → {"method":"query","data":"<hex>"}
//! ← {"code":0,"value":"<hex>"}
//! → {"method":"commit"}
//! ← {"appHash":"<hex>"}
//! ```
//!
//! A line that does not parse is answered with `{"error": "..."}` and the
//! connection stays open.

use serde::{Deserialize, Serialize};
use shared_types::HexBytes;
use tl_06_application::{
    ApplicationError, ConsensusApplication, ResponseCheckTx, ResponseCommit, ResponseDeliverTx,
    ResponseInfo, ResponseQuery,
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Request {
    Info,
    CheckTx { tx: HexBytes },
    DeliverTx { tx: HexBytes },
    Commit,
    Query { data: HexBytes },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Info(ResponseInfo),
    CheckTx(ResponseCheckTx),
    DeliverTx(ResponseDeliverTx),
    Commit(ResponseCommit),
    Query(ResponseQuery),
    Error { error: String },
}

/// Answer one frame.
///
/// `Err` only when the application reports a failed commit; the caller must
/// stop serving.
pub fn dispatch(app: &dyn ConsensusApplication, line: &str) -> Result<Response, ApplicationError> {
    let request: Request = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(e) => {
            return Ok(Response::Error {
                error: format!("bad frame: {e}"),
            })
        }
    };

    Ok(match request {
        Request::Info => Response::Info(app.info()),
        Request::CheckTx { tx } => Response::CheckTx(app.check_tx(tx.as_slice())),
        Request::DeliverTx { tx } => Response::DeliverTx(app.deliver_tx(tx.as_slice())),
        Request::Commit => Response::Commit(app.commit()?),
        Request::Query { data } => Response::Query(app.query(data.as_slice())),
    })
}
