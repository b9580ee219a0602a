use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::OperatorSet;

/// New absolute magnitude an operator wants committed to one strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagnitudeTarget {
    pub strategy: Address,
    pub new_magnitude: u64,
}

impl MagnitudeTarget {
    pub const fn new(strategy: Address, new_magnitude: u64) -> Self {
        Self { strategy, new_magnitude }
    }
}

/// One allocation request: the operator set and the target magnitude per
/// strategy. Targets are absolute values, not deltas; the ledger derives
/// the signed change itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocateParams {
    pub operator_set: OperatorSet,
    pub targets: Vec<MagnitudeTarget>,
}

impl AllocateParams {
    pub fn new(operator_set: OperatorSet, targets: Vec<MagnitudeTarget>) -> Self {
        Self { operator_set, targets }
    }
}
