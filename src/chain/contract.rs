//! Allowlist registry ABI and calldata helpers.

use alloy::primitives::{Address, Bytes, U256};
use alloy::sol;
use alloy::sol_types::SolCall;

use crate::chain::types::{ChainError, ChainResult};

sol! {
    /// Registry holding one allowlist per numeric id.
    interface IAllowlistRegistry {
        /// All addresses currently recorded for an allowlist.
        function getAllowlist(uint256 id) external view returns (address[] memory);

        /// Add a batch of addresses to an allowlist.
        function addToAllowlist(uint256 id, address[] calldata entries) external;

        /// Remove a batch of addresses from an allowlist.
        function removeFromAllowlist(uint256 id, address[] calldata entries) external;
    }
}

/// The two mutations the registry supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Add,
    Remove,
}

impl std::fmt::Display for MutationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MutationKind::Add => f.write_str("add"),
            MutationKind::Remove => f.write_str("remove"),
        }
    }
}

/// Encode the read call for an allowlist id.
pub fn encode_read(id: U256) -> Bytes {
    IAllowlistRegistry::getAllowlistCall { id }.abi_encode().into()
}

/// Decode the address sequence returned by `getAllowlist`.
pub fn decode_allowlist(data: &[u8]) -> ChainResult<Vec<Address>> {
    IAllowlistRegistry::getAllowlistCall::abi_decode_returns(data)
        .map_err(|e| ChainError::Abi(format!("getAllowlist return: {e}")))
}

/// Encode a batched add or remove mutation over the given addresses.
pub fn encode_mutation(id: U256, addresses: &[Address], kind: MutationKind) -> Bytes {
    let entries = addresses.to_vec();
    match kind {
        MutationKind::Add => IAllowlistRegistry::addToAllowlistCall { id, entries }
            .abi_encode()
            .into(),
        MutationKind::Remove => IAllowlistRegistry::removeFromAllowlistCall { id, entries }
            .abi_encode()
            .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;
    use alloy::sol_types::SolValue;

    fn batch() -> Vec<Address> {
        vec![
            address!("0x1111111111111111111111111111111111111111"),
            address!("0x2222222222222222222222222222222222222222"),
        ]
    }

    #[test]
    fn test_mutation_selectors_differ_by_kind() {
        let id = U256::from(3);
        let add = encode_mutation(id, &batch(), MutationKind::Add);
        let remove = encode_mutation(id, &batch(), MutationKind::Remove);

        assert_eq!(&add[..4], IAllowlistRegistry::addToAllowlistCall::SELECTOR);
        assert_eq!(
            &remove[..4],
            IAllowlistRegistry::removeFromAllowlistCall::SELECTOR
        );
        assert_ne!(&add[..4], &remove[..4]);
        // Same arguments after the selector.
        assert_eq!(&add[4..], &remove[4..]);
    }

    #[test]
    fn test_read_call_carries_id() {
        let data = encode_read(U256::from(7));
        assert_eq!(&data[..4], IAllowlistRegistry::getAllowlistCall::SELECTOR);
        // A uint256 argument is one 32-byte word.
        assert_eq!(data.len(), 4 + 32);
        assert_eq!(data[4 + 31], 7);
    }

    #[test]
    fn test_decode_allowlist_round_trip() {
        let addresses = batch();
        let encoded = addresses.abi_encode();
        let decoded = decode_allowlist(&encoded).unwrap();
        assert_eq!(decoded, addresses);
    }

    #[test]
    fn test_decode_allowlist_rejects_garbage() {
        assert!(decode_allowlist(&[0x01, 0x02, 0x03]).is_err());
    }
}
