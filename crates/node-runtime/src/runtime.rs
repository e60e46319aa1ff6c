//! The running node.

use crate::container::{load_registry, open_application, NodeConfig};
use crate::server::FrameServer;
use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{error, info};

pub struct NodeRuntime {
    config: NodeConfig,
    server: FrameServer,
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
}

impl NodeRuntime {
    /// Load the registry and open the ledger.
    ///
    /// Fails on a missing registry document or corrupt persisted state.
    pub fn new(config: NodeConfig) -> Result<Self> {
        let registry = load_registry(&config).context("Failed to load authorization registry")?;
        let app = open_application(&config, Arc::new(registry))
            .context("Failed to open ledger application")?;
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        Ok(Self {
            config,
            server: FrameServer::new(app),
            shutdown_tx,
            shutdown_rx,
        })
    }

    /// Bind the listen address and serve until shutdown or a failed commit.
    pub async fn run(&self) -> Result<()> {
        info!("===========================================");
        info!("  TaxLedger Node Runtime v{}", env!("CARGO_PKG_VERSION"));
        info!("===========================================");
        info!("Data Dir: {:?}", self.config.storage.data_dir);
        info!("Content Dir: {:?}", self.config.registry.content_dir);

        let listener = TcpListener::bind(self.config.network.listen_addr)
            .await
            .with_context(|| format!("Failed to bind {}", self.config.network.listen_addr))?;
        self.server
            .serve(listener, self.shutdown_rx.clone())
            .await
            .context("Frame server stopped with an error")
    }

    pub fn shutdown(&self) {
        info!("Initiating graceful shutdown...");
        if let Err(e) = self.shutdown_tx.send(true) {
            error!("Failed to send shutdown signal: {}", e);
        }
    }
}
