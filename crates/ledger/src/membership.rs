use std::collections::HashMap;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use talion_primitives::{OperatorSet, DEALLOCATION_DELAY};

/// Registration state of one operator in one operator set.
///
/// Slashability outlives membership: leaving flips `registered` off
/// immediately but keeps the operator exposed through `slashable_until`.
/// While registered the window is open-ended (`u64::MAX`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationStatus {
    pub registered: bool,
    pub slashable_until: u64,
}

/// Store of registration records, keyed by (operator, set).
#[derive(Debug, Default)]
pub struct MembershipLedger {
    registrations: HashMap<(Address, OperatorSet), RegistrationStatus>,
}

impl MembershipLedger {
    pub fn new() -> Self {
        Self { registrations: HashMap::new() }
    }

    /// Declares `operator` a member of `set`. Idempotent.
    pub fn join(&mut self, operator: Address, set: OperatorSet) {
        self.registrations.insert(
            (operator, set),
            RegistrationStatus { registered: true, slashable_until: u64::MAX },
        );
    }

    /// Withdraws `operator` from every set in `sets`. Unconditional: no
    /// check is made against open allocations or pending changes. Each
    /// departure leaves a slashability window ending at
    /// `leave_block + DEALLOCATION_DELAY`.
    pub fn leave(&mut self, operator: Address, sets: &[OperatorSet], leave_block: u64) {
        for &set in sets {
            self.registrations.insert(
                (operator, set),
                RegistrationStatus {
                    registered: false,
                    slashable_until: leave_block.saturating_add(DEALLOCATION_DELAY),
                },
            );
        }
    }

    /// Whether `operator` can be slashed for `set` at `current_block`:
    /// either still registered, or inside the post-departure window. The
    /// single source of truth for delayed exposure.
    pub fn is_slashable(&self, operator: Address, set: OperatorSet, current_block: u64) -> bool {
        match self.registrations.get(&(operator, set)) {
            Some(status) => status.registered || current_block <= status.slashable_until,
            None => false,
        }
    }

    pub fn registration(&self, operator: Address, set: OperatorSet) -> Option<RegistrationStatus> {
        self.registrations.get(&(operator, set)).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&(Address, OperatorSet), &RegistrationStatus)> {
        self.registrations.iter()
    }

    pub(crate) fn restore_registration(
        &mut self,
        operator: Address,
        set: OperatorSet,
        status: RegistrationStatus,
    ) {
        self.registrations.insert((operator, set), status);
    }
}
