//! # Frame Server
//!
//! A local stand-in for the consensus engine transport. Every connection
//! runs on its own task and answers its frames strictly in order. Deliveries
//! from different connections are serialized by the application itself.

pub mod frames;

pub use frames::{dispatch, Request, Response};

use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tl_06_application::{ApplicationError, ConsensusApplication};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::watch;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("accept failed: {0}")]
    Accept(#[source] std::io::Error),

    /// Commit could not be made durable; serving must stop.
    #[error("application halted: {0}")]
    Halted(#[from] ApplicationError),
}

pub struct FrameServer {
    app: Arc<dyn ConsensusApplication>,
}

enum ConnectionEnd {
    Closed,
    Shutdown,
}

impl FrameServer {
    pub fn new(app: Arc<dyn ConsensusApplication>) -> Self {
        Self { app }
    }

    /// Serve until `shutdown` flips to `true` or a commit fails.
    ///
    /// Open connections are aborted when serving stops.
    pub async fn serve(
        &self,
        listener: TcpListener,
        mut shutdown: watch::Receiver<bool>,
    ) -> Result<(), ServerError> {
        if let Ok(addr) = listener.local_addr() {
            info!("[node] 🔌 Listening on {}", addr);
        }

        let mut connections: JoinSet<Result<(), ApplicationError>> = JoinSet::new();

        loop {
            tokio::select! {
                accepted = listener.accept() => {
                    let (stream, peer) = accepted.map_err(ServerError::Accept)?;
                    info!("[node] Connection from {}", peer);
                    let app = Arc::clone(&self.app);
                    let shutdown = shutdown.clone();
                    connections.spawn(serve_connection(app, stream, peer, shutdown));
                }
                Some(finished) = connections.join_next() => {
                    match finished {
                        Ok(Ok(())) => {}
                        Ok(Err(e)) => {
                            error!("[node] ❌ Commit failed, stopping: {}", e);
                            return Err(ServerError::Halted(e));
                        }
                        Err(e) if e.is_panic() => warn!("[node] Connection task panicked: {}", e),
                        Err(_) => {}
                    }
                }
                _ = shutdown.changed() => break,
            }
        }

        connections.shutdown().await;
        info!("[node] Frame server stopped");
        Ok(())
    }
}

/// Drive one connection to its end. Only a failed commit is an error.
async fn serve_connection(
    app: Arc<dyn ConsensusApplication>,
    stream: TcpStream,
    peer: SocketAddr,
    mut shutdown: watch::Receiver<bool>,
) -> Result<(), ApplicationError> {
    match handle_connection(app.as_ref(), stream, &mut shutdown).await {
        Ok(ConnectionEnd::Closed) => info!("[node] Connection from {} closed", peer),
        Ok(ConnectionEnd::Shutdown) => debug!("[node] Connection from {} shut down", peer),
        Err(ConnectionError::Io(e)) => warn!("[node] Connection from {} dropped: {}", peer, e),
        Err(ConnectionError::Halted(e)) => return Err(e),
    }
    Ok(())
}

async fn handle_connection(
    app: &dyn ConsensusApplication,
    stream: TcpStream,
    shutdown: &mut watch::Receiver<bool>,
) -> Result<ConnectionEnd, ConnectionError> {
    let (reader, mut writer) = stream.into_split();
    let mut lines = BufReader::new(reader).lines();

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = shutdown.changed() => return Ok(ConnectionEnd::Shutdown),
        };
        let Some(line) = line else {
            return Ok(ConnectionEnd::Closed);
        };
        if line.trim().is_empty() {
            continue;
        }

        let response = dispatch(app, &line)?;
        let mut out = serde_json::to_vec(&response)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        out.push(b'\n');
        writer.write_all(&out).await?;
        debug!("[node] Answered {} byte frame", line.len());
    }
}

#[derive(Debug, Error)]
enum ConnectionError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Halted(#[from] ApplicationError),
}
