//! # Flooring CLI
//!
//! Command-line front end for placing and maintaining flooring orders.
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  init_tracing ─► parse args ─► load FlooringConfig                      │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  OrderService<FlatFileStore, FileAuditLog>                              │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  import_all_data ─► run subcommand ─► print result                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod commands;
mod config;
mod display;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use flooring_service::OrderService;
use flooring_store::{FileAuditLog, FlatFileStore};

use crate::commands::Command;
use crate::config::FlooringConfig;

#[derive(Parser, Debug)]
#[command(name = "flooring", about = "Flooring order management", version)]
struct Cli {
    /// Configuration file (TOML); missing is fine
    #[arg(
        long,
        env = "FLOORING_CONFIG",
        value_name = "FILE",
        default_value = "flooring.toml",
        global = true
    )]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = FlooringConfig::load(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    let store_config = config.to_store_config();
    info!(
        data_dir = %store_config.data_dir.display(),
        audit_file = %store_config.audit_file.display(),
        "Configuration loaded"
    );

    let audit = FileAuditLog::new(&store_config.audit_file);
    let mut service = OrderService::new(FlatFileStore::new(store_config), audit);
    service.import_all_data()?;

    let output = commands::run(&mut service, cli.command)?;
    println!("{output}");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show store and service detail
/// - `RUST_LOG=audit=off` - Hide the audit echo
/// - Default: INFO level, on stderr so command output stays clean
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
