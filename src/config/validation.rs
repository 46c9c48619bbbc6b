//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check addresses and URLs actually parse
//! - Validate value ranges (limits and intervals > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: KeeperConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use alloy::primitives::Address;
use url::Url;

use crate::config::schema::KeeperConfig;

/// One semantic problem with a configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &KeeperConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.chain.contract_address.parse::<Address>().is_err() {
        errors.push(ValidationError {
            field: "chain.contract_address",
            message: format!("'{}' is not a valid address", config.chain.contract_address),
        });
    }

    if config.chain.rpc_url.parse::<Url>().is_err() {
        errors.push(ValidationError {
            field: "chain.rpc_url",
            message: format!("'{}' is not a valid URL", config.chain.rpc_url),
        });
    }

    for url in &config.chain.failover_urls {
        if url.parse::<Url>().is_err() {
            errors.push(ValidationError {
                field: "chain.failover_urls",
                message: format!("'{url}' is not a valid URL"),
            });
        }
    }

    if config.chain.rpc_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "chain.rpc_timeout_secs",
            message: "must be greater than zero".to_string(),
        });
    }

    if config.gas.station_url.parse::<Url>().is_err() {
        errors.push(ValidationError {
            field: "gas.station_url",
            message: format!("'{}' is not a valid URL", config.gas.station_url),
        });
    }

    if !(config.gas.cost_limit_native > 0.0) {
        errors.push(ValidationError {
            field: "gas.cost_limit_native",
            message: "must be greater than zero".to_string(),
        });
    }

    if config.run.interval_secs == 0 {
        errors.push(ValidationError {
            field: "run.interval_secs",
            message: "must be greater than zero".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
