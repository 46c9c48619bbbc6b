//! Transaction building, pricing, cost gating, signing, and broadcast.

use alloy::consensus::TxEip1559;
use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, TxKind, U256};
use alloy::rpc::types::TransactionRequest;
use async_trait::async_trait;
use std::sync::Arc;

use crate::chain::client::ChainClient;
use crate::chain::contract::{encode_mutation, MutationKind};
use crate::chain::wallet::Wallet;
use crate::gas::station::GasOracle;
use crate::gas::types::wei_to_native;
use crate::submit::observer::{SubmitObserver, TxEvent};
use crate::submit::types::{MutationSubmitter, SubmitError, SubmitOutcome};

/// Submits one batched allowlist mutation through its full lifecycle.
///
/// One `submit` call owns its pending transaction end to end; calls are
/// strictly sequential within a reconciliation pass.
pub struct TxSubmitter {
    client: ChainClient,
    wallet: Wallet,
    oracle: GasOracle,
    allowlist_id: U256,
    /// Maximum acceptable estimated cost, in the chain's native unit.
    cost_limit_native: f64,
    /// When set, stop after the cost gate: nothing is signed or broadcast.
    offline: bool,
    observer: Arc<dyn SubmitObserver>,
}

impl TxSubmitter {
    pub fn new(
        client: ChainClient,
        wallet: Wallet,
        oracle: GasOracle,
        allowlist_id: U256,
        cost_limit_native: f64,
        offline: bool,
        observer: Arc<dyn SubmitObserver>,
    ) -> Self {
        Self {
            client,
            wallet,
            oracle,
            allowlist_id,
            cost_limit_native,
            offline,
            observer,
        }
    }
}

/// Estimated transaction cost in the chain's native unit.
///
/// `gas_limit × (priority_fee + base_fee)`, with the base fee taken in
/// gwei as the oracle reports it.
pub fn estimated_cost_native(gas_limit: u64, priority_fee_wei: u128, base_fee_gwei: f64) -> f64 {
    wei_to_native(gas_limit as f64 * (priority_fee_wei as f64 + base_fee_gwei * 1e9))
}

#[async_trait]
impl MutationSubmitter for TxSubmitter {
    async fn submit(
        &self,
        addresses: &[Address],
        kind: MutationKind,
    ) -> Result<SubmitOutcome, SubmitError> {
        tracing::info!(
            kind = %kind,
            count = addresses.len(),
            addresses = ?addresses,
            "Submitting allowlist mutation"
        );

        // 1. Build
        if addresses.is_empty() {
            return Err(SubmitError::Build(
                "refusing to build a zero-address mutation".to_string(),
            ));
        }
        let calldata = encode_mutation(self.allowlist_id, addresses, kind);

        // 2. Price: gas limit from the network's estimate for this exact
        // payload, priority fee from the oracle's tier recommendation.
        let request = TransactionRequest::default()
            .with_from(self.wallet.address())
            .with_to(self.client.contract_address())
            .with_input(calldata.clone());

        let gas_limit = self
            .client
            .estimate_gas(request)
            .await
            .map_err(|e| SubmitError::Pricing(e.to_string()))?;

        let pricing = self
            .oracle
            .fetch()
            .await
            .map_err(|e| SubmitError::Pricing(e.to_string()))?;
        let priority_fee_wei = pricing.priority_fee_wei();
        let max_fee_per_gas = priority_fee_wei + 2 * pricing.base_fee_wei();

        tracing::info!(
            kind = %kind,
            gas_limit = gas_limit,
            max_priority_fee_per_gas = priority_fee_wei,
            tier = %self.oracle.tier(),
            "Transaction priced"
        );

        // 3. Cost gate: re-query the base fee so the abort decision is
        // made on a fresh estimate.
        let gate = self
            .oracle
            .fetch()
            .await
            .map_err(|e| SubmitError::Pricing(e.to_string()))?;
        let estimated_native = estimated_cost_native(gas_limit, priority_fee_wei, gate.base_fee_gwei);

        tracing::info!(
            estimated_cost = estimated_native,
            cost_limit = self.cost_limit_native,
            "Estimated transaction cost"
        );

        if estimated_native > self.cost_limit_native {
            tracing::warn!(
                estimated_cost = estimated_native,
                cost_limit = self.cost_limit_native,
                "ABORTED: estimated cost exceeds limit"
            );
            return Ok(SubmitOutcome::CostAborted {
                estimated_native,
                limit_native: self.cost_limit_native,
            });
        }

        if self.offline {
            tracing::info!(kind = %kind, "Offline mode: mutation priced but not broadcast");
            return Ok(SubmitOutcome::DryRun { estimated_native });
        }

        // 4. Sign
        let chain_nonce = self
            .client
            .transaction_count(self.wallet.address())
            .await
            .map_err(|e| SubmitError::Pricing(e.to_string()))?;
        self.wallet.set_nonce(chain_nonce);
        let nonce = self.wallet.get_and_increment_nonce();

        let tx = TxEip1559 {
            chain_id: self.wallet.chain_id(),
            nonce,
            gas_limit,
            max_fee_per_gas,
            max_priority_fee_per_gas: priority_fee_wei,
            to: TxKind::Call(self.client.contract_address()),
            value: U256::ZERO,
            access_list: Default::default(),
            input: calldata,
        };
        let raw = self
            .wallet
            .sign_eip1559(tx)
            .map_err(|e| SubmitError::Signing(e.to_string()))?;

        // 5. Broadcast & track
        self.observer.on_event(&TxEvent::Sending);
        let tx_hash = self
            .client
            .broadcast(&raw)
            .await
            .map_err(|e| SubmitError::Broadcast(e.to_string()))?;
        self.observer.on_event(&TxEvent::Sent);
        self.observer.on_event(&TxEvent::Hash(tx_hash));

        let receipt = self
            .client
            .wait_for_receipt(tx_hash)
            .await
            .map_err(|e| SubmitError::Broadcast(e.to_string()))?;
        self.observer.on_event(&TxEvent::Receipt(receipt.clone()));

        self.client
            .wait_for_confirmation(receipt.block_number)
            .await
            .map_err(|e| SubmitError::Broadcast(e.to_string()))?;
        self.observer.on_event(&TxEvent::Confirmed);

        Ok(SubmitOutcome::Confirmed(receipt))
    }
}
