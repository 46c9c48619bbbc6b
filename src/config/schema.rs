//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! keeper. All types derive Serde traits for deserialization from config
//! files. The configuration is immutable once loaded; every component
//! receives the section it needs by value or reference at construction.

use serde::{Deserialize, Serialize};

use crate::gas::types::PriorityTier;

/// Root configuration for the allowlist keeper.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct KeeperConfig {
    /// Chain connectivity and contract settings.
    pub chain: ChainConfig,

    /// Fee oracle and cost ceiling settings.
    pub gas: GasConfig,

    /// Allowlist identity and schedule source.
    pub allowlist: AllowlistConfig,

    /// Run mode and pacing.
    pub run: RunConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Chain connectivity configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChainConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Failover JSON-RPC endpoint URLs.
    #[serde(default)]
    pub failover_urls: Vec<String>,

    /// Chain ID (e.g., 137 for Polygon mainnet, 31337 for local Anvil).
    pub chain_id: u64,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,

    /// Maximum time to wait for a receipt or confirmation depth, in seconds.
    pub receipt_timeout_secs: u64,

    /// Number of block confirmations required for finality.
    pub confirmation_blocks: u32,

    /// Address of the allowlist registry contract.
    pub contract_address: String,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_url: "https://polygon-rpc.com/".to_string(),
            failover_urls: Vec::new(),
            chain_id: 137,
            rpc_timeout_secs: 10,
            receipt_timeout_secs: 120,
            confirmation_blocks: 3,
            contract_address: String::new(),
        }
    }
}

/// Fee oracle configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GasConfig {
    /// Fee station endpoint URL.
    pub station_url: String,

    /// Fee aggressiveness tier to request from the station.
    pub tier: PriorityTier,

    /// Abort a submission if its estimated cost exceeds this limit,
    /// specified in the chain's native unit.
    pub cost_limit_native: f64,
}

impl Default for GasConfig {
    fn default() -> Self {
        Self {
            station_url: "https://gasstation-mainnet.matic.network/v2".to_string(),
            tier: PriorityTier::Standard,
            cost_limit_native: 0.25,
        }
    }
}

/// Allowlist identity and schedule source.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AllowlistConfig {
    /// Numeric id of the allowlist within the registry contract.
    pub id: u64,

    /// Path to the TOML schedule file.
    pub schedule_path: String,
}

impl Default for AllowlistConfig {
    fn default() -> Self {
        Self {
            id: 0,
            schedule_path: "schedule.toml".to_string(),
        }
    }
}

/// Run mode and pacing configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RunConfig {
    /// Seconds to sleep between reconciliation passes.
    pub interval_secs: u64,

    /// Run exactly one pass and exit.
    pub once: bool,

    /// Remove the entire on-chain allowlist, then exit. Implies `once`.
    pub clear_only: bool,

    /// Build and price mutations but never sign or broadcast.
    pub offline: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            interval_secs: 120,
            once: false,
            clear_only: false,
            offline: false,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log filter (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
