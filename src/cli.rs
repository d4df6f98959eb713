//! Process bootstrap: argument parsing, logging, store setup, serving.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::dispatcher::Dispatcher;
use crate::registry::EndpointRegistry;
use crate::runtime_config::RuntimeConfig;
use crate::server::{HttpServer, IntakeService};
use crate::store::ReportStore;

#[derive(Parser)]
#[command(name = "custodia")]
#[command(about = "Chain-of-custody evidence intake server", long_about = None)]
pub struct Cli {
    /// Directory where report documents are stored (created if absent)
    #[arg(short = 'd', long, env = "CUSTODIA_STORE_DIR")]
    pub store_dir: PathBuf,

    /// Address to bind the HTTP listener to
    #[arg(long, default_value = "0.0.0.0:4000", env = "CUSTODIA_ADDR")]
    pub addr: String,
}

/// Parse arguments, wire the core together, and serve until stopped.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = RuntimeConfig::from_env();
    may::config().set_stack_size(config.stack_size);

    // directory creation happens here, once, before the dispatcher is reachable
    let store = ReportStore::open(&cli.store_dir)?;
    let registry = EndpointRegistry::new();
    let mut dispatcher = Dispatcher::new(registry, store);
    dispatcher.bind_defaults();

    let service = IntakeService::new(Arc::new(dispatcher));
    let handle = HttpServer(service)
        .start(&cli.addr)
        .map_err(|e| anyhow::anyhow!("unable to bind {}: {e}", cli.addr))?;

    info!(addr = %cli.addr, store_dir = %cli.store_dir.display(), "Server created");

    handle
        .join()
        .map_err(|e| anyhow::anyhow!("server failed: {e:?}"))?;
    Ok(())
}
