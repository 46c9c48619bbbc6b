//! Transaction lifecycle observation.

use alloy::primitives::TxHash;

use crate::chain::types::ReceiptSummary;

/// Ordered lifecycle transitions of one broadcast transaction.
///
/// Emitted in sequence: `Sending → Sent → Hash → Receipt → Confirmed`.
#[derive(Debug, Clone, PartialEq)]
pub enum TxEvent {
    Sending,
    Sent,
    Hash(TxHash),
    Receipt(ReceiptSummary),
    Confirmed,
}

/// Observer for transaction lifecycle transitions.
///
/// Exactly one observer sees every transition, in order. Observation must
/// not block the submitter for long; the default implementation just logs.
pub trait SubmitObserver: Send + Sync {
    fn on_event(&self, event: &TxEvent);
}

/// Default observer: logs every transition through `tracing`.
#[derive(Debug, Default)]
pub struct LogObserver;

impl SubmitObserver for LogObserver {
    fn on_event(&self, event: &TxEvent) {
        match event {
            TxEvent::Sending => tracing::info!("Sending transaction..."),
            TxEvent::Sent => tracing::info!("Transaction sent."),
            TxEvent::Hash(hash) => tracing::info!(tx_hash = %hash, "Transaction hash assigned"),
            TxEvent::Receipt(receipt) => tracing::info!(
                block_number = receipt.block_number,
                gas_used = receipt.gas_used,
                effective_gas_price = receipt.effective_gas_price,
                "Obtained receipt for transaction"
            ),
            TxEvent::Confirmed => tracing::info!("Transaction complete."),
        }
    }
}
