//! On-chain allowlist keeper library.
//!
//! Reconciles an allowlist registry inside a smart contract against a
//! time-scheduled policy: each pass reads the current on-chain list,
//! evaluates which addresses should be allowed this minute, and submits
//! the minimal batched add/remove mutations, gated by a fee cost ceiling.

pub mod chain;
pub mod config;
pub mod gas;
pub mod reconcile;
pub mod schedule;
pub mod submit;

pub use chain::{ChainClient, Wallet};
pub use config::KeeperConfig;
pub use reconcile::Keeper;
pub use submit::TxSubmitter;
