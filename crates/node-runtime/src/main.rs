//! # TaxLedger Node
//!
//! ```text
//! node-runtime                                  # serve the ledger
//! node-runtime demo-keys [KEYS_DIR] [PERCENT]   # publish a demo registry
//! ```
//!
//! Configuration comes from `TL_*` environment variables; see
//! `container::config`.

use anyhow::{Context, Result};
use node_runtime::{create_demo_keys, load_config, NodeConfig, NodeRuntime};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn init_logging(config: &NodeConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level.0)
        .with_context(|| format!("Invalid TL_LOG_LEVEL {:?}", config.log_level.0))?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn demo_keys(config: &NodeConfig, mut args: impl Iterator<Item = String>) -> Result<()> {
    let keys_dir = PathBuf::from(args.next().unwrap_or_else(|| "./keys".to_string()));
    let percentage = match args.next() {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("Invalid tax percentage {raw:?}"))?,
        None => 10,
    };

    let demo = create_demo_keys(&config.registry.content_dir, &keys_dir, percentage)
        .context("Failed to create demo keys")?;
    print!("{}", demo.env_lines());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = load_config().context("Invalid configuration")?;
    init_logging(&config)?;

    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        None => {}
        Some("demo-keys") => return demo_keys(&config, args),
        Some(other) => anyhow::bail!("Unknown command {other:?}"),
    }

    let runtime = NodeRuntime::new(config)?;

    tokio::select! {
        result = runtime.run() => result?,
        signal = tokio::signal::ctrl_c() => {
            signal.context("Failed to listen for Ctrl+C")?;
            runtime.shutdown();
        }
    }

    info!("Shutdown complete");
    Ok(())
}
