//! Chain-specific types and error definitions.

use alloy::primitives::TxHash;
use thiserror::Error;

// Re-export ChainConfig from config module to avoid duplication
pub use crate::config::schema::ChainConfig;

/// Chain ID type for strong typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(pub u64);

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ChainId> for u64 {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

/// Errors that can occur during chain operations.
#[derive(Debug, Error)]
pub enum ChainError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Calldata encoding or return-value decoding failed.
    #[error("ABI error: {0}")]
    Abi(String),

    /// Transaction was not confirmed within expected time.
    #[error("Transaction not confirmed after {0} blocks")]
    ConfirmationTimeout(u32),

    /// Transaction was reverted on-chain.
    #[error("Transaction reverted: {0}")]
    Reverted(String),

    /// Invalid private key format or signing failure.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Chain configuration mismatch.
    #[error("Chain ID mismatch: expected {expected}, got {actual}")]
    ChainMismatch { expected: u64, actual: u64 },
}

/// Result type for chain operations.
pub type ChainResult<T> = Result<T, ChainError>;

/// The fields of a mined receipt the keeper reports and logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptSummary {
    pub tx_hash: TxHash,
    pub block_number: u64,
    pub gas_used: u64,
    pub effective_gas_price: u128,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::B256;

    #[test]
    fn test_chain_id_conversion() {
        let chain_id = ChainId::from(137u64);
        assert_eq!(chain_id.0, 137);
        assert_eq!(u64::from(chain_id), 137);
    }

    #[test]
    fn test_error_display() {
        let err = ChainError::ConfirmationTimeout(3);
        assert_eq!(err.to_string(), "Transaction not confirmed after 3 blocks");

        let err = ChainError::ChainMismatch {
            expected: 137,
            actual: 1,
        };
        assert!(err.to_string().contains("137"));
    }

    #[test]
    fn test_receipt_summary_fields() {
        let receipt = ReceiptSummary {
            tx_hash: B256::ZERO,
            block_number: 4200,
            gas_used: 65000,
            effective_gas_price: 31_000_000_000,
        };
        assert_eq!(receipt.block_number, 4200);
        assert_eq!(receipt.gas_used, 65000);
    }
}
