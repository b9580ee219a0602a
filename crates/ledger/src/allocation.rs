use std::collections::HashMap;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use talion_primitives::{OperatorSet, WAD};

/// One allocation cell: the magnitude currently committed to a strategy
/// inside an operator set, plus at most one scheduled change.
///
/// A scheduled change is realized lazily: the next mutating operation that
/// touches the cell at or after `effect_block` folds `pending_delta` into
/// `current_magnitude`. Reads return the cell verbatim, so a due-but-unfolded
/// decrease is visible only as a past `effect_block` next to an unchanged
/// magnitude.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub current_magnitude: u64,
    pub pending_delta: i128,
    pub effect_block: u64,
}

impl Allocation {
    /// Folds a due pending delta into the current magnitude, clamping at
    /// zero: a slash applied during the delay may have left less magnitude
    /// than the scheduled decrease. Returns whether anything was folded.
    pub fn fold_due(&mut self, current_block: u64) -> bool {
        if self.pending_delta == 0 || current_block < self.effect_block {
            return false;
        }
        let folded = (self.current_magnitude as i128).saturating_add(self.pending_delta);
        self.current_magnitude = folded.clamp(0, u64::MAX as i128) as u64;
        self.pending_delta = 0;
        true
    }

    /// Whether a scheduled change has not been folded yet, due or not.
    pub fn has_pending(&self) -> bool {
        self.pending_delta != 0
    }
}

pub(crate) type AllocationKey = (Address, OperatorSet, Address);
pub(crate) type MagnitudeKey = (Address, Address);

/// Keyed magnitude store: allocation cells per (operator, set, strategy) and
/// the max-magnitude ceiling per (operator, strategy). Owned by the ledger
/// facade; nothing else writes it.
#[derive(Debug, Default)]
pub struct AllocationLedger {
    allocations: HashMap<AllocationKey, Allocation>,
    max_magnitudes: HashMap<MagnitudeKey, u64>,
}

impl AllocationLedger {
    pub fn new() -> Self {
        Self { allocations: HashMap::new(), max_magnitudes: HashMap::new() }
    }

    /// The stored cell, zero for keys never written.
    pub fn allocation(&self, operator: Address, set: OperatorSet, strategy: Address) -> Allocation {
        self.allocations.get(&(operator, set, strategy)).copied().unwrap_or_default()
    }

    /// Ceiling on allocatable magnitude. Every key starts fully available at
    /// `WAD`; slashing lowers it and nothing ever raises it again.
    pub fn max_magnitude(&self, operator: Address, strategy: Address) -> u64 {
        self.max_magnitudes.get(&(operator, strategy)).copied().unwrap_or(WAD)
    }

    pub(crate) fn set_allocation(
        &mut self,
        operator: Address,
        set: OperatorSet,
        strategy: Address,
        allocation: Allocation,
    ) {
        self.allocations.insert((operator, set, strategy), allocation);
    }

    /// Lowers the ceiling by `amount`, clamping at zero. Cells are keyed per
    /// set while the ceiling is per strategy, so each set can back an
    /// allocation up to the full ceiling and cuts arriving through several
    /// sets can sum past what remains of it.
    pub(crate) fn lower_max_magnitude(&mut self, operator: Address, strategy: Address, amount: u64) {
        let lowered = self.max_magnitude(operator, strategy).saturating_sub(amount);
        self.max_magnitudes.insert((operator, strategy), lowered);
    }

    pub fn iter_allocations(&self) -> impl Iterator<Item = (&AllocationKey, &Allocation)> {
        self.allocations.iter()
    }

    pub fn iter_max_magnitudes(&self) -> impl Iterator<Item = (&MagnitudeKey, &u64)> {
        self.max_magnitudes.iter()
    }

    pub(crate) fn restore_allocation(&mut self, key: AllocationKey, allocation: Allocation) {
        self.allocations.insert(key, allocation);
    }

    pub(crate) fn restore_max_magnitude(&mut self, key: MagnitudeKey, max: u64) {
        self.max_magnitudes.insert(key, max);
    }
}
