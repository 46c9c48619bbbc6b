//! Allowlist keeper daemon.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌────────────────────────────────────────────────┐
//!                    │                ALLOWLIST KEEPER                │
//!                    │                                                │
//!   schedule.toml ───┼─▶ schedule ──▶ reconcile ◀── chain (read) ◀────┼──── RPC endpoint
//!                    │   evaluator      keeper                        │
//!                    │                    │                           │
//!                    │                    ▼                           │
//!                    │                 submit ──▶ chain (broadcast) ──┼──▶ RPC endpoint
//!                    │              build/price/                      │
//!                    │              gate/sign                         │
//!                    │                    │                           │
//!                    │                    ▼                           │
//!                    │                gas oracle ◀────────────────────┼──── fee station
//!                    │                                                │
//!                    │  ┌──────────────────────────────────────────┐  │
//!                    │  │          Cross-Cutting Concerns          │  │
//!                    │  │   config (immutable)   tracing (logs)    │  │
//!                    │  └──────────────────────────────────────────┘  │
//!                    └────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use alloy::primitives::U256;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use allowlist_keeper::chain::{ChainClient, Wallet};
use allowlist_keeper::config::load_config;
use allowlist_keeper::gas::GasOracle;
use allowlist_keeper::reconcile::Keeper;
use allowlist_keeper::schedule::loader::load_schedule;
use allowlist_keeper::submit::{LogObserver, TxSubmitter};

#[derive(Parser)]
#[command(name = "allowlist-keeper")]
#[command(about = "Keeps an on-chain allowlist in sync with a time schedule", long_about = None)]
struct Cli {
    /// Path to the keeper configuration file.
    #[arg(short, long, default_value = "keeper.toml")]
    config: PathBuf,

    /// Run one reconciliation pass and exit.
    #[arg(long)]
    once: bool,

    /// Remove every address currently on the allowlist, then exit.
    #[arg(long)]
    clear: bool,

    /// Build and price mutations but never broadcast them.
    #[arg(long)]
    offline: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = load_config(&cli.config)?;

    // CLI flags layer over the config file; clear implies once.
    config.run.once |= cli.once;
    config.run.clear_only |= cli.clear;
    config.run.offline |= cli.offline;
    if config.run.clear_only {
        config.run.once = true;
    }

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.observability.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("allowlist-keeper v0.1.0 starting");
    tracing::info!(
        allowlist_id = config.allowlist.id,
        contract = %config.chain.contract_address,
        interval_secs = config.run.interval_secs,
        once = config.run.once,
        clear_only = config.run.clear_only,
        offline = config.run.offline,
        "Configuration loaded"
    );

    let entries = load_schedule(std::path::Path::new(&config.allowlist.schedule_path))?;

    let wallet = Wallet::from_env(config.chain.chain_id)?;
    let client = ChainClient::new(config.chain.clone()).await?;
    let oracle = GasOracle::new(config.gas.station_url.parse()?, config.gas.tier);

    let submitter = TxSubmitter::new(
        client.clone(),
        wallet,
        oracle,
        U256::from(config.allowlist.id),
        config.gas.cost_limit_native,
        config.run.offline,
        Arc::new(LogObserver),
    );

    let keeper = Keeper::new(
        client,
        submitter,
        entries,
        U256::from(config.allowlist.id),
        config.run.clone(),
    );

    keeper.run().await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
