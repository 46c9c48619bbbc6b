//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML) + CLI flags
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → KeeperConfig (validated, immutable)
//!     → passed into every component constructor
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; no component reads ambient state
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - The signing key never lives in the config file; it comes from an
//!   environment variable read by the wallet

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::KeeperConfig;
pub use schema::{AllowlistConfig, ChainConfig, GasConfig, RunConfig};
