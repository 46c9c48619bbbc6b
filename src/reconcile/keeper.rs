//! Reconciliation loop.

use std::collections::BTreeSet;
use std::time::Duration;

use alloy::primitives::{Address, U256};
use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;
use tokio::time::sleep;

use crate::chain::client::ChainClient;
use crate::chain::contract::MutationKind;
use crate::chain::types::ChainError;
use crate::config::schema::RunConfig;
use crate::reconcile::plan::{plan, ReconciliationPlan};
use crate::schedule::evaluator::scheduled_addresses;
use crate::schedule::types::ScheduleEntry;
use crate::submit::types::{MutationSubmitter, SubmitError, SubmitOutcome};

/// Seam between the reconciliation loop and the chain read path.
#[async_trait]
pub trait AllowlistReader: Send + Sync {
    async fn read_allowlist(&self, id: U256) -> Result<Vec<Address>, ChainError>;
}

#[async_trait]
impl AllowlistReader for ChainClient {
    async fn read_allowlist(&self, id: U256) -> Result<Vec<Address>, ChainError> {
        ChainClient::read_allowlist(self, id).await
    }
}

/// Error from one reconciliation pass.
#[derive(Debug, Error)]
pub enum PassError {
    #[error("allowlist read failed: {0}")]
    Read(#[from] ChainError),

    #[error(transparent)]
    Submit(#[from] SubmitError),
}

impl PassError {
    /// Whether the pass failed in a way no retry can fix.
    pub fn is_fatal(&self) -> bool {
        matches!(self, PassError::Submit(e) if e.is_fatal())
    }
}

/// Drives the on-chain allowlist toward the scheduled target.
///
/// Exactly one pass is in flight at any time; the next pass is scheduled
/// only after the current one fully settles. The on-chain list is read
/// fresh every pass and never cached.
pub struct Keeper<R, S> {
    reader: R,
    submitter: S,
    entries: Vec<ScheduleEntry>,
    allowlist_id: U256,
    run: RunConfig,
}

impl<R: AllowlistReader, S: MutationSubmitter> Keeper<R, S> {
    pub fn new(
        reader: R,
        submitter: S,
        entries: Vec<ScheduleEntry>,
        allowlist_id: U256,
        run: RunConfig,
    ) -> Self {
        Self {
            reader,
            submitter,
            entries,
            allowlist_id,
            run,
        }
    }

    /// The submitter driving this keeper's mutations.
    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    /// Run passes until the configured mode stops, or a fatal error.
    ///
    /// Transient pass failures are logged and retried on the next pass;
    /// the loop itself never crashes on them.
    pub async fn run(&self) -> Result<(), PassError> {
        if self.run.offline {
            tracing::info!("Offline mode is enabled, no transactions will be broadcast");
        }

        loop {
            match self.run_pass().await {
                Ok(()) => {}
                Err(e) if e.is_fatal() => {
                    tracing::error!(error = %e, "Fatal error, stopping keeper");
                    return Err(e);
                }
                Err(e) => {
                    tracing::error!(error = %e, "Reconciliation pass failed; retrying next pass");
                }
            }

            if self.run.once || self.run.clear_only {
                tracing::info!("Single-pass mode, stopping");
                return Ok(());
            }

            sleep(Duration::from_secs(self.run.interval_secs)).await;
        }
    }

    /// One full read-diff-mutate cycle.
    pub async fn run_pass(&self) -> Result<(), PassError> {
        tracing::info!(allowlist_id = %self.allowlist_id, "Reconciliation pass started");

        let on_chain: BTreeSet<Address> = self
            .reader
            .read_allowlist(self.allowlist_id)
            .await?
            .into_iter()
            .collect();
        let scheduled = scheduled_addresses(&self.entries, Utc::now());
        let current_plan = plan(&on_chain, &scheduled);

        tracing::info!(
            on_chain = ?on_chain,
            scheduled = ?scheduled,
            to_add = current_plan.to_add.len(),
            to_remove = current_plan.to_remove.len(),
            "Plan computed"
        );

        if self.run.clear_only {
            return self.clear(&on_chain).await;
        }

        if current_plan.is_settled() {
            tracing::info!("Allowlist already matches schedule, nothing to submit");
            return Ok(());
        }

        self.apply(&current_plan).await
    }

    /// Clear-only mode: remove the entire current on-chain list,
    /// regardless of what the schedule would compute.
    async fn clear(&self, on_chain: &BTreeSet<Address>) -> Result<(), PassError> {
        if on_chain.is_empty() {
            tracing::info!("Allowlist is already empty, nothing to clear");
            return Ok(());
        }

        tracing::info!(count = on_chain.len(), "Clearing all addresses from allowlist");
        let batch: Vec<Address> = on_chain.iter().copied().collect();
        let outcome = self.submitter.submit(&batch, MutationKind::Remove).await?;
        log_outcome(MutationKind::Remove, &outcome);
        Ok(())
    }

    /// Submit the add batch, then the remove batch. The remove runs even
    /// when the add failed; the two mutations are independent.
    async fn apply(&self, current_plan: &ReconciliationPlan) -> Result<(), PassError> {
        let mut errors: Vec<PassError> = Vec::new();

        if !current_plan.to_add.is_empty() {
            let batch: Vec<Address> = current_plan.to_add.iter().copied().collect();
            match self.submitter.submit(&batch, MutationKind::Add).await {
                Ok(outcome) => log_outcome(MutationKind::Add, &outcome),
                Err(e) => {
                    tracing::error!(error = %e, "Error adding addresses to allowlist");
                    errors.push(e.into());
                }
            }
        }

        if !current_plan.to_remove.is_empty() {
            let batch: Vec<Address> = current_plan.to_remove.iter().copied().collect();
            match self.submitter.submit(&batch, MutationKind::Remove).await {
                Ok(outcome) => log_outcome(MutationKind::Remove, &outcome),
                Err(e) => {
                    tracing::error!(error = %e, "Error removing addresses from allowlist");
                    errors.push(e.into());
                }
            }
        }

        if let Some(fatal) = errors.iter().position(|e| e.is_fatal()) {
            return Err(errors.swap_remove(fatal));
        }
        match errors.into_iter().next() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

fn log_outcome(kind: MutationKind, outcome: &SubmitOutcome) {
    match outcome {
        SubmitOutcome::Confirmed(receipt) => tracing::info!(
            kind = %kind,
            tx_hash = %receipt.tx_hash,
            block_number = receipt.block_number,
            "Mutation confirmed"
        ),
        SubmitOutcome::CostAborted {
            estimated_native,
            limit_native,
        } => tracing::warn!(
            kind = %kind,
            estimated_cost = estimated_native,
            cost_limit = limit_native,
            "Mutation aborted on cost, retrying next pass"
        ),
        SubmitOutcome::DryRun { estimated_native } => tracing::info!(
            kind = %kind,
            estimated_cost = estimated_native,
            "Dry run, mutation not broadcast"
        ),
    }
}
