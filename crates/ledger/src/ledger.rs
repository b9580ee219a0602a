use std::collections::HashMap;

use alloy_primitives::Address;
use parking_lot::RwLock;
use talion_primitives::{
    mul_wad_up, AllocateParams, OperatorSet, SlashReceipt, SlashRecord, SlashRequest,
    SlashedMagnitude, DEALLOCATION_DELAY,
};
use tracing::{debug, info};

use crate::{
    allocation::{Allocation, AllocationLedger},
    clock::BlockClock,
    error::{LedgerError, LedgerResult},
    membership::{MembershipLedger, RegistrationStatus},
    registry::{OperatorSetRegistry, SetRecord},
    snapshot::{
        AllocationEntry, LedgerSnapshot, MaxMagnitudeEntry, OperatorSetEntry, RegistrationEntry,
    },
};

#[derive(Debug)]
struct LedgerInner {
    registry: OperatorSetRegistry,
    membership: MembershipLedger,
    allocations: AllocationLedger,
    slash_records: Vec<SlashRecord>,
    next_slash_id: u64,
}

impl Default for LedgerInner {
    fn default() -> Self {
        Self {
            registry: OperatorSetRegistry::new(),
            membership: MembershipLedger::new(),
            allocations: AllocationLedger::new(),
            slash_records: Vec::new(),
            next_slash_id: 1,
        }
    }
}

/// The slashing and allocation ledger.
///
/// All state sits behind one lock. A mutating operation holds the write
/// guard for its whole span, validates every entry of its request against a
/// staged view, and commits only when the whole batch passed, so a failed
/// call writes nothing and overlapping calls serialize.
#[derive(Debug)]
pub struct Ledger {
    inner: RwLock<LedgerInner>,
    clock: BlockClock,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(BlockClock::default())
    }
}

impl Ledger {
    pub fn new(clock: BlockClock) -> Self {
        Self { inner: RwLock::new(LedgerInner::default()), clock }
    }

    pub fn clock(&self) -> &BlockClock {
        &self.clock
    }

    /// Registers a new operator set with its eligible strategies and the one
    /// address allowed to slash through it.
    pub fn create_set(
        &self,
        set: OperatorSet,
        strategies: Vec<Address>,
        slasher: Address,
    ) -> LedgerResult<()> {
        let mut inner = self.inner.write();
        inner.registry.create_set(set, strategies, slasher)?;
        info!("Created operator set {} with slasher {}", set, slasher);
        Ok(())
    }

    /// Declares `operator` a member of every listed set. Idempotent per set;
    /// rejoining during a departure window reopens full exposure.
    pub fn register(&self, operator: Address, sets: &[OperatorSet]) {
        let mut inner = self.inner.write();
        for &set in sets {
            inner.membership.join(operator, set);
        }
        info!("Registered operator {} for {} operator set(s)", operator, sets.len());
    }

    /// Withdraws `operator` from every listed set, starting the slashability
    /// window at the current block. Unconditional: open allocations and
    /// scheduled changes are left as they are, each keeping its own effect
    /// block.
    pub fn deregister(&self, operator: Address, sets: &[OperatorSet]) {
        let block = self.clock.current_block();
        let mut inner = self.inner.write();
        inner.membership.leave(operator, sets, block);
        info!(
            "Deregistered operator {} from {} operator set(s) at block {}, slashable until {}",
            operator,
            sets.len(),
            block,
            block.saturating_add(DEALLOCATION_DELAY)
        );
    }

    /// Whether `operator` can currently be slashed for `set`: registered, or
    /// still inside the post-departure window.
    pub fn is_slashable(&self, operator: Address, set: OperatorSet) -> bool {
        let block = self.clock.current_block();
        self.inner.read().membership.is_slashable(operator, set, block)
    }

    /// Applies a batch of target-magnitude requests for `operator`.
    ///
    /// Targets are absolute. For each (set, strategy) pair the ledger folds
    /// any due scheduled change, derives the signed delta against the folded
    /// magnitude, and then either applies the target at once (increases, and
    /// decreases while the operator is not slashable) or schedules it behind
    /// the deallocation delay (decreases while slashable), leaving the
    /// magnitude counted as allocated until the delay elapses. An accepted
    /// entry replaces whatever change the cell had scheduled before.
    ///
    /// The whole batch validates before anything is written; on error no
    /// cell changes. Returns the effect block of each entry in request
    /// order: the current block for immediate changes, the scheduled block
    /// for delayed ones.
    pub fn modify_allocations(
        &self,
        operator: Address,
        params: &[AllocateParams],
    ) -> LedgerResult<Vec<u64>> {
        let block = self.clock.current_block();
        let mut inner = self.inner.write();

        let mut staged: HashMap<(OperatorSet, Address), Allocation> = HashMap::new();
        let mut effect_blocks = Vec::new();
        for request in params {
            let set = request.operator_set;
            let slashable = inner.membership.is_slashable(operator, set, block);
            for target in &request.targets {
                let mut cell = match staged.get(&(set, target.strategy)) {
                    Some(cell) => *cell,
                    None => inner.allocations.allocation(operator, set, target.strategy),
                };
                cell.fold_due(block);

                let delta = target.new_magnitude as i128 - cell.current_magnitude as i128;
                if delta == 0 {
                    return Err(LedgerError::NoChange {
                        strategy: target.strategy,
                        magnitude: cell.current_magnitude,
                    });
                }
                cell = if delta > 0 {
                    let max = inner.allocations.max_magnitude(operator, target.strategy);
                    if target.new_magnitude > max {
                        return Err(LedgerError::InsufficientCeiling {
                            strategy: target.strategy,
                            requested: target.new_magnitude,
                            max,
                        });
                    }
                    Allocation {
                        current_magnitude: target.new_magnitude,
                        pending_delta: 0,
                        effect_block: block,
                    }
                } else if slashable {
                    Allocation {
                        current_magnitude: cell.current_magnitude,
                        pending_delta: delta,
                        effect_block: block.saturating_add(DEALLOCATION_DELAY + 1),
                    }
                } else {
                    Allocation {
                        current_magnitude: target.new_magnitude,
                        pending_delta: 0,
                        effect_block: block,
                    }
                };
                staged.insert((set, target.strategy), cell);
                effect_blocks.push(cell.effect_block);
            }
        }

        for ((set, strategy), cell) in staged {
            inner.allocations.set_allocation(operator, set, strategy, cell);
        }
        debug!("Applied {} allocation request(s) for operator {}", params.len(), operator);
        Ok(effect_blocks)
    }

    /// Applies an authorized slash and returns the receipt.
    ///
    /// `caller` must be the slasher on record for the request's operator set,
    /// and the operator must be inside its slashability window. Nothing else
    /// is checked: the description is stored, not validated. Per strategy the
    /// slashed amount is the wad fraction of the current magnitude rounded
    /// up, so the realized fraction is never below the nominal one. The cell
    /// and the operator's max magnitude both drop by the slashed amount, and
    /// no operation ever raises them back.
    pub fn slash(&self, caller: Address, request: &SlashRequest) -> LedgerResult<SlashReceipt> {
        let block = self.clock.current_block();
        let set = request.operator_set();
        let mut inner = self.inner.write();

        if !inner.registry.is_authorized_slasher(set, caller) {
            return Err(LedgerError::Unauthorized { set, caller });
        }
        if !inner.membership.is_slashable(request.operator, set, block) {
            return Err(LedgerError::NotSlashable { set, operator: request.operator, block });
        }

        let mut staged: HashMap<Address, Allocation> = HashMap::new();
        let mut ceiling_cuts: HashMap<Address, u64> = HashMap::new();
        let mut slashed = Vec::with_capacity(request.slashes.len());
        for entry in &request.slashes {
            let mut cell = match staged.get(&entry.strategy) {
                Some(cell) => *cell,
                None => inner.allocations.allocation(request.operator, set, entry.strategy),
            };
            cell.fold_due(block);

            let amount = if cell.current_magnitude == 0 {
                0
            } else {
                // Rounded up, then capped so an out-of-range fraction cannot
                // destroy more than the cell holds.
                mul_wad_up(cell.current_magnitude, entry.wad_to_slash)
                    .min(cell.current_magnitude as u128) as u64
            };
            cell.current_magnitude -= amount;
            staged.insert(entry.strategy, cell);
            *ceiling_cuts.entry(entry.strategy).or_insert(0) += amount;
            slashed.push(SlashedMagnitude { strategy: entry.strategy, magnitude: amount });
        }

        for (strategy, cell) in staged {
            inner.allocations.set_allocation(request.operator, set, strategy, cell);
        }
        for (strategy, cut) in ceiling_cuts {
            if cut > 0 {
                inner.allocations.lower_max_magnitude(request.operator, strategy, cut);
            }
        }

        let slash_id = inner.next_slash_id;
        inner.next_slash_id = inner.next_slash_id.saturating_add(1);
        let receipt = SlashReceipt { slash_id, slashed };
        inner.slash_records.push(SlashRecord {
            slash_id,
            operator_set: set,
            operator: request.operator,
            slashed: receipt.slashed.clone(),
            description: request.description.clone(),
            block,
        });
        info!(
            "Slash {} applied to operator {} in set {}: {} magnitude destroyed ({})",
            slash_id,
            request.operator,
            set,
            receipt.total_slashed(),
            request.description
        );
        Ok(receipt)
    }

    /// Folds due scheduled changes for the listed strategies into their
    /// cells. Reads never do this, so settling is the explicit way to
    /// realize a due deallocation without another allocation or slash
    /// touching the key. Returns how many cells changed.
    pub fn settle(&self, operator: Address, set: OperatorSet, strategies: &[Address]) -> usize {
        let block = self.clock.current_block();
        let mut inner = self.inner.write();
        let mut settled = 0;
        for &strategy in strategies {
            let mut cell = inner.allocations.allocation(operator, set, strategy);
            if cell.fold_due(block) {
                inner.allocations.set_allocation(operator, set, strategy, cell);
                settled += 1;
            }
        }
        if settled > 0 {
            debug!("Settled {} allocation(s) for operator {} in set {}", settled, operator, set);
        }
        settled
    }

    /// The stored allocation cell, verbatim. A due-but-unsettled change
    /// shows up as a past `effect_block` next to an unchanged magnitude.
    pub fn allocation(&self, operator: Address, set: OperatorSet, strategy: Address) -> Allocation {
        self.inner.read().allocations.allocation(operator, set, strategy)
    }

    pub fn max_magnitude(&self, operator: Address, strategy: Address) -> u64 {
        self.inner.read().allocations.max_magnitude(operator, strategy)
    }

    pub fn registration(&self, operator: Address, set: OperatorSet) -> Option<RegistrationStatus> {
        self.inner.read().membership.registration(operator, set)
    }

    pub fn operator_set(&self, set: OperatorSet) -> Option<SetRecord> {
        self.inner.read().registry.get(set).cloned()
    }

    pub fn slash_record(&self, slash_id: u64) -> Option<SlashRecord> {
        self.inner.read().slash_records.iter().find(|record| record.slash_id == slash_id).cloned()
    }

    pub fn slash_records(&self) -> Vec<SlashRecord> {
        self.inner.read().slash_records.clone()
    }

    /// Serializable image of the whole ledger, entry lists sorted by key.
    pub fn snapshot(&self) -> LedgerSnapshot {
        let inner = self.inner.read();

        let mut operator_sets: Vec<OperatorSetEntry> = inner
            .registry
            .iter()
            .map(|(&set, record)| OperatorSetEntry {
                set,
                slasher: record.slasher,
                strategies: record.strategies.clone(),
            })
            .collect();
        operator_sets.sort_by_key(|entry| entry.set);

        let mut registrations: Vec<RegistrationEntry> = inner
            .membership
            .iter()
            .map(|(&(operator, set), &status)| RegistrationEntry { operator, set, status })
            .collect();
        registrations.sort_by_key(|entry| (entry.operator, entry.set));

        let mut allocations: Vec<AllocationEntry> = inner
            .allocations
            .iter_allocations()
            .map(|(&(operator, set, strategy), &allocation)| AllocationEntry {
                operator,
                set,
                strategy,
                allocation,
            })
            .collect();
        allocations.sort_by_key(|entry| (entry.operator, entry.set, entry.strategy));

        let mut max_magnitudes: Vec<MaxMagnitudeEntry> = inner
            .allocations
            .iter_max_magnitudes()
            .map(|(&(operator, strategy), &max_magnitude)| MaxMagnitudeEntry {
                operator,
                strategy,
                max_magnitude,
            })
            .collect();
        max_magnitudes.sort_by_key(|entry| (entry.operator, entry.strategy));

        LedgerSnapshot {
            current_block: self.clock.current_block(),
            next_slash_id: inner.next_slash_id,
            operator_sets,
            registrations,
            allocations,
            max_magnitudes,
            slash_records: inner.slash_records.clone(),
        }
    }

    /// Rebuilds a ledger from a snapshot.
    pub fn from_snapshot(snapshot: LedgerSnapshot) -> Self {
        let mut inner = LedgerInner::default();
        for entry in snapshot.operator_sets {
            inner.registry.restore_set(
                entry.set,
                SetRecord { slasher: entry.slasher, strategies: entry.strategies },
            );
        }
        for entry in snapshot.registrations {
            inner.membership.restore_registration(entry.operator, entry.set, entry.status);
        }
        for entry in snapshot.allocations {
            inner
                .allocations
                .restore_allocation((entry.operator, entry.set, entry.strategy), entry.allocation);
        }
        for entry in snapshot.max_magnitudes {
            inner
                .allocations
                .restore_max_magnitude((entry.operator, entry.strategy), entry.max_magnitude);
        }
        inner.slash_records = snapshot.slash_records;
        // ids start at 1
        inner.next_slash_id = snapshot.next_slash_id.max(1);
        Self { inner: RwLock::new(inner), clock: BlockClock::new(snapshot.current_block) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use talion_primitives::{MagnitudeTarget, StrategySlash, WAD};

    const DUMMY_AVS: Address = address!("0x0000777735367b36bC9B61C50022d9D0700dB4Ec");
    const DUMMY_OPERATOR: Address = address!("0x00000000219ab540356cBB839Cbe05303d7705Fa");
    const DUMMY_SLASHER: Address = address!("0x00000000000000000000000000000000000051a5");
    const DUMMY_STRATEGY: Address = address!("0xbeaC0eeEeeeeEEeEeEEEEeeEEeEeeeEeeEEBEaC0");
    const START_BLOCK: u64 = 100;

    fn ledger_with_set() -> (Ledger, OperatorSet) {
        let ledger = Ledger::new(BlockClock::new(START_BLOCK));
        let set = OperatorSet::new(DUMMY_AVS, 0);
        ledger.create_set(set, vec![DUMMY_STRATEGY], DUMMY_SLASHER).unwrap();
        ledger.register(DUMMY_OPERATOR, &[set]);
        (ledger, set)
    }

    fn allocate(ledger: &Ledger, set: OperatorSet, magnitude: u64) {
        ledger
            .modify_allocations(
                DUMMY_OPERATOR,
                &[AllocateParams::new(set, vec![MagnitudeTarget::new(DUMMY_STRATEGY, magnitude)])],
            )
            .unwrap();
    }

    fn slash_request(set: OperatorSet, wad: u64) -> SlashRequest {
        SlashRequest {
            avs: set.avs,
            operator_set_id: set.id,
            operator: DUMMY_OPERATOR,
            slashes: vec![StrategySlash::new(DUMMY_STRATEGY, wad)],
            description: "missed attestation".to_string(),
        }
    }

    #[test]
    fn created_sets_read_back_their_record() {
        let (ledger, set) = ledger_with_set();

        let record = ledger.operator_set(set).unwrap();
        assert_eq!(record.slasher, DUMMY_SLASHER);
        assert_eq!(record.strategies, vec![DUMMY_STRATEGY]);
        assert!(ledger.operator_set(OperatorSet::new(DUMMY_AVS, 9)).is_none());
    }

    #[test]
    fn increases_apply_immediately() {
        let (ledger, set) = ledger_with_set();
        allocate(&ledger, set, 500);

        let cell = ledger.allocation(DUMMY_OPERATOR, set, DUMMY_STRATEGY);
        assert_eq!(
            cell,
            Allocation { current_magnitude: 500, pending_delta: 0, effect_block: START_BLOCK }
        );
    }

    #[test]
    fn decreases_while_slashable_are_scheduled_behind_the_delay() {
        let (ledger, set) = ledger_with_set();
        allocate(&ledger, set, 500);
        allocate(&ledger, set, 300);

        let cell = ledger.allocation(DUMMY_OPERATOR, set, DUMMY_STRATEGY);
        assert_eq!(
            cell,
            Allocation {
                current_magnitude: 500,
                pending_delta: -200,
                effect_block: START_BLOCK + DEALLOCATION_DELAY + 1,
            }
        );
    }

    #[test]
    fn scheduling_near_the_clock_ceiling_saturates_the_effect_block() {
        let ledger = Ledger::new(BlockClock::new(u64::MAX - 10));
        let set = OperatorSet::new(DUMMY_AVS, 0);
        ledger.create_set(set, vec![DUMMY_STRATEGY], DUMMY_SLASHER).unwrap();
        ledger.register(DUMMY_OPERATOR, &[set]);
        allocate(&ledger, set, 500);

        let effect_blocks = ledger
            .modify_allocations(
                DUMMY_OPERATOR,
                &[AllocateParams::new(set, vec![MagnitudeTarget::new(DUMMY_STRATEGY, 200)])],
            )
            .unwrap();
        assert_eq!(effect_blocks, vec![u64::MAX]);

        let cell = ledger.allocation(DUMMY_OPERATOR, set, DUMMY_STRATEGY);
        assert_eq!(cell.current_magnitude, 500);
        assert_eq!(cell.effect_block, u64::MAX);
    }

    #[test]
    fn returned_effect_blocks_follow_the_schedule() {
        let (ledger, set) = ledger_with_set();
        let immediate = ledger
            .modify_allocations(
                DUMMY_OPERATOR,
                &[AllocateParams::new(set, vec![MagnitudeTarget::new(DUMMY_STRATEGY, 500)])],
            )
            .unwrap();
        assert_eq!(immediate, vec![START_BLOCK]);

        let delayed = ledger
            .modify_allocations(
                DUMMY_OPERATOR,
                &[AllocateParams::new(set, vec![MagnitudeTarget::new(DUMMY_STRATEGY, 200)])],
            )
            .unwrap();
        assert_eq!(delayed, vec![START_BLOCK + DEALLOCATION_DELAY + 1]);
    }

    #[test]
    fn settle_realizes_a_due_decrease_and_only_a_due_one() {
        let (ledger, set) = ledger_with_set();
        allocate(&ledger, set, 500);
        allocate(&ledger, set, 300);

        assert_eq!(ledger.settle(DUMMY_OPERATOR, set, &[DUMMY_STRATEGY]), 0);

        ledger.clock().advance(DEALLOCATION_DELAY + 1);
        assert_eq!(ledger.settle(DUMMY_OPERATOR, set, &[DUMMY_STRATEGY]), 1);

        let cell = ledger.allocation(DUMMY_OPERATOR, set, DUMMY_STRATEGY);
        assert_eq!(cell.current_magnitude, 300);
        assert!(!cell.has_pending());
    }

    #[test]
    fn decreases_apply_immediately_once_the_window_has_closed() {
        let (ledger, set) = ledger_with_set();
        allocate(&ledger, set, 500);
        ledger.deregister(DUMMY_OPERATOR, &[set]);
        ledger.clock().advance(DEALLOCATION_DELAY + 1);

        allocate(&ledger, set, 100);
        let cell = ledger.allocation(DUMMY_OPERATOR, set, DUMMY_STRATEGY);
        assert_eq!(cell.current_magnitude, 100);
        assert!(!cell.has_pending());
    }

    #[test]
    fn reads_return_the_stored_cell_verbatim_even_past_the_effect_block() {
        let (ledger, set) = ledger_with_set();
        allocate(&ledger, set, 500);
        allocate(&ledger, set, 300);
        ledger.clock().advance(DEALLOCATION_DELAY + 42);

        let cell = ledger.allocation(DUMMY_OPERATOR, set, DUMMY_STRATEGY);
        assert_eq!(cell.current_magnitude, 500);
        assert_eq!(cell.pending_delta, -200);
    }

    #[test]
    fn a_target_equal_to_the_current_magnitude_is_rejected() {
        let (ledger, set) = ledger_with_set();
        allocate(&ledger, set, 500);

        let err = ledger
            .modify_allocations(
                DUMMY_OPERATOR,
                &[AllocateParams::new(set, vec![MagnitudeTarget::new(DUMMY_STRATEGY, 500)])],
            )
            .unwrap_err();
        assert_eq!(err, LedgerError::NoChange { strategy: DUMMY_STRATEGY, magnitude: 500 });
    }

    #[test]
    fn a_target_above_the_ceiling_is_rejected() {
        let (ledger, set) = ledger_with_set();

        let err = ledger
            .modify_allocations(
                DUMMY_OPERATOR,
                &[AllocateParams::new(set, vec![MagnitudeTarget::new(DUMMY_STRATEGY, WAD + 1)])],
            )
            .unwrap_err();
        assert_eq!(
            err,
            LedgerError::InsufficientCeiling {
                strategy: DUMMY_STRATEGY,
                requested: WAD + 1,
                max: WAD,
            }
        );
    }

    #[test]
    fn a_failed_batch_writes_nothing() {
        let (ledger, set) = ledger_with_set();
        allocate(&ledger, set, 500);
        let before = ledger.snapshot();

        let err = ledger
            .modify_allocations(
                DUMMY_OPERATOR,
                &[AllocateParams::new(
                    set,
                    vec![
                        MagnitudeTarget::new(DUMMY_STRATEGY, 800),
                        MagnitudeTarget::new(DUMMY_STRATEGY, 800),
                    ],
                )],
            )
            .unwrap_err();
        assert!(matches!(err, LedgerError::NoChange { .. }));
        assert_eq!(ledger.snapshot(), before);
    }

    #[test]
    fn slashing_requires_the_recorded_slasher() {
        let (ledger, set) = ledger_with_set();
        allocate(&ledger, set, 500);

        let err = ledger.slash(DUMMY_OPERATOR, &slash_request(set, WAD / 2)).unwrap_err();
        assert_eq!(err, LedgerError::Unauthorized { set, caller: DUMMY_OPERATOR });
    }

    #[test]
    fn slashing_outside_the_window_is_rejected() {
        let (ledger, set) = ledger_with_set();
        allocate(&ledger, set, 500);
        ledger.deregister(DUMMY_OPERATOR, &[set]);
        let block = ledger.clock().advance(DEALLOCATION_DELAY + 1);

        let err = ledger.slash(DUMMY_SLASHER, &slash_request(set, WAD / 2)).unwrap_err();
        assert_eq!(err, LedgerError::NotSlashable { set, operator: DUMMY_OPERATOR, block });
    }

    #[test]
    fn slashing_destroys_magnitude_and_lowers_the_ceiling() {
        let (ledger, set) = ledger_with_set();
        allocate(&ledger, set, 1_000);

        let receipt = ledger.slash(DUMMY_SLASHER, &slash_request(set, WAD / 2)).unwrap();
        assert_eq!(receipt.slash_id, 1);
        assert_eq!(
            receipt.slashed,
            vec![SlashedMagnitude { strategy: DUMMY_STRATEGY, magnitude: 500 }]
        );

        assert_eq!(ledger.allocation(DUMMY_OPERATOR, set, DUMMY_STRATEGY).current_magnitude, 500);
        assert_eq!(ledger.max_magnitude(DUMMY_OPERATOR, DUMMY_STRATEGY), WAD - 500);

        let record = ledger.slash_record(1).unwrap();
        assert_eq!(record.operator, DUMMY_OPERATOR);
        assert_eq!(record.description, "missed attestation");
        assert_eq!(record.block, START_BLOCK);
    }

    #[test]
    fn slash_ids_start_at_one_and_increase() {
        let (ledger, set) = ledger_with_set();
        allocate(&ledger, set, 1_000);

        let first = ledger.slash(DUMMY_SLASHER, &slash_request(set, WAD / 10)).unwrap();
        let second = ledger.slash(DUMMY_SLASHER, &slash_request(set, WAD / 10)).unwrap();
        assert_eq!(first.slash_id, 1);
        assert_eq!(second.slash_id, 2);
        assert_eq!(ledger.slash_records().len(), 2);
    }

    #[test]
    fn slashing_a_zero_magnitude_cell_destroys_nothing() {
        let (ledger, set) = ledger_with_set();

        let receipt = ledger.slash(DUMMY_SLASHER, &slash_request(set, WAD)).unwrap();
        assert_eq!(receipt.total_slashed(), 0);
        assert_eq!(ledger.max_magnitude(DUMMY_OPERATOR, DUMMY_STRATEGY), WAD);
    }

    #[test]
    fn slashing_folds_a_due_decrease_first() {
        let (ledger, set) = ledger_with_set();
        allocate(&ledger, set, 1_000);
        allocate(&ledger, set, 600);
        ledger.clock().advance(DEALLOCATION_DELAY + 1);

        let receipt = ledger.slash(DUMMY_SLASHER, &slash_request(set, WAD / 2)).unwrap();
        assert_eq!(receipt.total_slashed(), 300);
        assert_eq!(ledger.allocation(DUMMY_OPERATOR, set, DUMMY_STRATEGY).current_magnitude, 300);
        assert_eq!(ledger.max_magnitude(DUMMY_OPERATOR, DUMMY_STRATEGY), WAD - 300);
    }

    #[test]
    fn a_snapshot_restores_to_an_equal_ledger() {
        let (ledger, set) = ledger_with_set();
        allocate(&ledger, set, 1_000);
        allocate(&ledger, set, 400);
        ledger.slash(DUMMY_SLASHER, &slash_request(set, WAD / 4)).unwrap();

        let snapshot = ledger.snapshot();
        let restored = Ledger::from_snapshot(snapshot.clone());
        assert_eq!(restored.snapshot(), snapshot);
        assert_eq!(restored.clock().current_block(), START_BLOCK);
        assert_eq!(restored.slash_records().len(), 1);
    }
}
