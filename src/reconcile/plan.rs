//! Reconciliation planning.

use std::collections::BTreeSet;

use alloy::primitives::Address;

/// The mutations needed to drive the on-chain allowlist to the scheduled
/// target. The two sets are disjoint by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconciliationPlan {
    /// Scheduled but not yet on-chain.
    pub to_add: BTreeSet<Address>,
    /// On-chain but no longer scheduled.
    pub to_remove: BTreeSet<Address>,
}

impl ReconciliationPlan {
    /// Whether the on-chain state already matches the schedule.
    pub fn is_settled(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

/// Compute the symmetric difference between the on-chain allowlist and
/// the scheduled allowlist.
///
/// Empty inputs are valid non-error states: a freshly deployed contract
/// reads as an empty `on_chain`, and a quiet schedule yields an empty
/// `scheduled`.
pub fn plan(on_chain: &BTreeSet<Address>, scheduled: &BTreeSet<Address>) -> ReconciliationPlan {
    ReconciliationPlan {
        to_add: scheduled.difference(on_chain).copied().collect(),
        to_remove: on_chain.difference(scheduled).copied().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    fn set(addresses: &[Address]) -> BTreeSet<Address> {
        addresses.iter().copied().collect()
    }

    const A: Address = address!("0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
    const B: Address = address!("0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb");
    const C: Address = address!("0xcccccccccccccccccccccccccccccccccccccccc");

    #[test]
    fn test_settled_state_proposes_nothing() {
        let state = set(&[A, B]);
        let result = plan(&state, &state);
        assert!(result.is_settled());
    }

    #[test]
    fn test_empty_chain_adds_everything() {
        let result = plan(&set(&[]), &set(&[A, B]));
        assert_eq!(result.to_add, set(&[A, B]));
        assert!(result.to_remove.is_empty());
    }

    #[test]
    fn test_empty_schedule_removes_everything() {
        let result = plan(&set(&[A, B]), &set(&[]));
        assert!(result.to_add.is_empty());
        assert_eq!(result.to_remove, set(&[A, B]));
    }

    #[test]
    fn test_mixed_drift() {
        // A stays, B leaves, C arrives.
        let result = plan(&set(&[A, B]), &set(&[A, C]));
        assert_eq!(result.to_add, set(&[C]));
        assert_eq!(result.to_remove, set(&[B]));
    }

    #[test]
    fn test_sets_are_always_disjoint() {
        let result = plan(&set(&[A, B]), &set(&[B, C]));
        assert!(result.to_add.intersection(&result.to_remove).next().is_none());
    }

    #[test]
    fn test_both_empty_is_settled() {
        assert!(plan(&set(&[]), &set(&[])).is_settled());
    }
}
