use std::collections::HashMap;

use alloy_primitives::Address;
use talion_primitives::OperatorSet;

use crate::error::{LedgerError, LedgerResult};

/// What creation bound to an operator set: its single authorized slasher and
/// the strategies it may allocate against. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetRecord {
    pub slasher: Address,
    pub strategies: Vec<Address>,
}

/// Store of created operator sets, keyed by (avs, id).
#[derive(Debug, Default)]
pub struct OperatorSetRegistry {
    sets: HashMap<OperatorSet, SetRecord>,
}

impl OperatorSetRegistry {
    pub fn new() -> Self {
        Self { sets: HashMap::new() }
    }

    /// Registers a new operator set together with the one address allowed to
    /// slash through it.
    pub fn create_set(
        &mut self,
        set: OperatorSet,
        strategies: Vec<Address>,
        slasher: Address,
    ) -> LedgerResult<()> {
        if self.contains(set) {
            return Err(LedgerError::DuplicateSet { set });
        }
        self.sets.insert(set, SetRecord { slasher, strategies });
        Ok(())
    }

    /// Whether `caller` is the slasher on record for `set`. Unknown sets
    /// have no slasher, so the answer is false; this lookup never fails.
    pub fn is_authorized_slasher(&self, set: OperatorSet, caller: Address) -> bool {
        self.sets.get(&set).is_some_and(|record| record.slasher == caller)
    }

    pub fn contains(&self, set: OperatorSet) -> bool {
        self.sets.contains_key(&set)
    }

    pub fn get(&self, set: OperatorSet) -> Option<&SetRecord> {
        self.sets.get(&set)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OperatorSet, &SetRecord)> {
        self.sets.iter()
    }

    pub(crate) fn restore_set(&mut self, set: OperatorSet, record: SetRecord) {
        self.sets.insert(set, record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    const DUMMY_AVS: Address = address!("0x0000777735367b36bC9B61C50022d9D0700dB4Ec");
    const DUMMY_SLASHER: Address = address!("0x00000000219ab540356cBB839Cbe05303d7705Fa");
    const DUMMY_STRATEGY: Address = address!("0xbeaC0eeEeeeeEEeEeEEEEeeEEeEeeeEeeEEBEaC0");

    #[test]
    fn create_set_records_the_slasher_and_strategies() {
        let mut registry = OperatorSetRegistry::new();
        let set = OperatorSet::new(DUMMY_AVS, 0);
        registry.create_set(set, vec![DUMMY_STRATEGY], DUMMY_SLASHER).unwrap();

        assert!(registry.contains(set));
        let record = registry.get(set).unwrap();
        assert_eq!(record.slasher, DUMMY_SLASHER);
        assert_eq!(record.strategies, vec![DUMMY_STRATEGY]);
    }

    #[test]
    fn create_set_fails_for_an_existing_set() {
        let mut registry = OperatorSetRegistry::new();
        let set = OperatorSet::new(DUMMY_AVS, 0);
        registry.create_set(set, vec![DUMMY_STRATEGY], DUMMY_SLASHER).unwrap();

        let err = registry.create_set(set, vec![], DUMMY_SLASHER).unwrap_err();
        assert_eq!(err, LedgerError::DuplicateSet { set });
    }

    #[test]
    fn same_avs_may_own_several_sets() {
        let mut registry = OperatorSetRegistry::new();
        registry.create_set(OperatorSet::new(DUMMY_AVS, 0), vec![], DUMMY_SLASHER).unwrap();
        registry.create_set(OperatorSet::new(DUMMY_AVS, 1), vec![], DUMMY_SLASHER).unwrap();

        assert!(registry.contains(OperatorSet::new(DUMMY_AVS, 0)));
        assert!(registry.contains(OperatorSet::new(DUMMY_AVS, 1)));
    }

    #[test]
    fn only_the_recorded_slasher_is_authorized() {
        let mut registry = OperatorSetRegistry::new();
        let set = OperatorSet::new(DUMMY_AVS, 0);
        registry.create_set(set, vec![DUMMY_STRATEGY], DUMMY_SLASHER).unwrap();

        assert!(registry.is_authorized_slasher(set, DUMMY_SLASHER));
        assert!(!registry.is_authorized_slasher(set, DUMMY_AVS));
    }

    #[test]
    fn unknown_sets_authorize_nobody() {
        let registry = OperatorSetRegistry::new();
        let set = OperatorSet::new(DUMMY_AVS, 9);
        assert!(!registry.is_authorized_slasher(set, DUMMY_SLASHER));
    }
}
