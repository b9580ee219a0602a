use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use talion_primitives::{OperatorSet, SlashRecord};

use crate::{allocation::Allocation, membership::RegistrationStatus};

/// One operator set with its configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorSetEntry {
    pub set: OperatorSet,
    pub slasher: Address,
    pub strategies: Vec<Address>,
}

/// One operator's registration status in one operator set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationEntry {
    pub operator: Address,
    pub set: OperatorSet,
    pub status: RegistrationStatus,
}

/// One allocation cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationEntry {
    pub operator: Address,
    pub set: OperatorSet,
    pub strategy: Address,
    pub allocation: Allocation,
}

/// One lowered max-magnitude ceiling. Ceilings still at the default are not
/// written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxMagnitudeEntry {
    pub operator: Address,
    pub strategy: Address,
    pub max_magnitude: u64,
}

/// Serializable image of the whole ledger at one block.
///
/// Entry lists are sorted by key, so two snapshots of equal state compare
/// equal regardless of the order writes happened in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub current_block: u64,
    pub next_slash_id: u64,
    pub operator_sets: Vec<OperatorSetEntry>,
    pub registrations: Vec<RegistrationEntry>,
    pub allocations: Vec<AllocationEntry>,
    pub max_magnitudes: Vec<MaxMagnitudeEntry>,
    pub slash_records: Vec<SlashRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn snapshot_survives_a_json_round_trip() {
        let avs = address!("0x0000777735367b36bC9B61C50022d9D0700dB4Ec");
        let operator = address!("0x00000000219ab540356cBB839Cbe05303d7705Fa");
        let strategy = address!("0xbeaC0eeEeeeeEEeEeEEEEeeEEeEeeeEeeEEBEaC0");
        let set = OperatorSet::new(avs, 7);

        let snapshot = LedgerSnapshot {
            current_block: 42,
            next_slash_id: 3,
            operator_sets: vec![OperatorSetEntry { set, slasher: avs, strategies: vec![strategy] }],
            registrations: vec![RegistrationEntry {
                operator,
                set,
                status: RegistrationStatus { registered: true, slashable_until: u64::MAX },
            }],
            allocations: vec![AllocationEntry {
                operator,
                set,
                strategy,
                allocation: Allocation {
                    current_magnitude: 500,
                    pending_delta: -100,
                    effect_block: 50,
                },
            }],
            max_magnitudes: vec![MaxMagnitudeEntry { operator, strategy, max_magnitude: 900 }],
            slash_records: vec![],
        };

        let encoded = serde_json::to_string(&snapshot).unwrap();
        let decoded: LedgerSnapshot = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, snapshot);
    }
}
