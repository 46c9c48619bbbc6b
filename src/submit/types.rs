//! Submission types and error definitions.

use alloy::primitives::Address;
use async_trait::async_trait;
use thiserror::Error;

use crate::chain::contract::MutationKind;
use crate::chain::types::ReceiptSummary;

/// Errors that can occur while submitting one mutation.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Calldata encoding failed.
    #[error("Build error: {0}")]
    Build(String),

    /// Gas estimation or fee oracle query failed.
    #[error("Pricing error: {0}")]
    Pricing(String),

    /// Signing failed. Fatal: retrying cannot fix a bad key.
    #[error("Signing error: {0}")]
    Signing(String),

    /// Broadcast was rejected, reverted, or timed out.
    #[error("Broadcast error: {0}")]
    Broadcast(String),
}

impl SubmitError {
    /// Whether the error indicates misconfiguration that no retry can fix.
    pub fn is_fatal(&self) -> bool {
        matches!(self, SubmitError::Signing(_))
    }
}

/// The non-error outcomes of one submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The transaction was broadcast, mined, and confirmed.
    Confirmed(ReceiptSummary),

    /// Estimated cost exceeded the configured ceiling; nothing was signed
    /// or broadcast. The next pass retries.
    CostAborted {
        estimated_native: f64,
        limit_native: f64,
    },

    /// Offline mode: the mutation was built and priced but not signed or
    /// broadcast.
    DryRun { estimated_native: f64 },
}

/// Seam between the reconciliation loop and the transaction submitter.
#[async_trait]
pub trait MutationSubmitter: Send + Sync {
    /// Submit one batched mutation over the given addresses.
    async fn submit(
        &self,
        addresses: &[Address],
        kind: MutationKind,
    ) -> Result<SubmitOutcome, SubmitError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_signing_is_fatal() {
        assert!(SubmitError::Signing("bad key".into()).is_fatal());
        assert!(!SubmitError::Build("encode".into()).is_fatal());
        assert!(!SubmitError::Pricing("oracle down".into()).is_fatal());
        assert!(!SubmitError::Broadcast("rejected".into()).is_fatal());
    }

    #[test]
    fn test_error_display() {
        let err = SubmitError::Pricing("fee station error: rate limited".into());
        assert!(err.to_string().contains("Pricing"));
        assert!(err.to_string().contains("rate limited"));
    }
}
