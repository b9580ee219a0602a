use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

/// Shared logical clock in block heights.
///
/// The ledger reads it at the start of every operation; the driver advances
/// it between calls. It never rewinds, so delay windows computed from it
/// only ever close.
#[derive(Debug, Clone, Default)]
pub struct BlockClock {
    current_block: Arc<AtomicU64>,
}

impl BlockClock {
    pub fn new(block: u64) -> Self {
        Self { current_block: Arc::new(AtomicU64::new(block)) }
    }

    pub fn current_block(&self) -> u64 {
        self.current_block.load(Ordering::Relaxed)
    }

    /// Moves the clock to `block`. Values at or below the current height are
    /// ignored.
    pub fn advance_to(&self, block: u64) {
        self.current_block.fetch_max(block, Ordering::Relaxed);
    }

    /// Moves the clock forward by `blocks` and returns the new height,
    /// saturating at the maximum height.
    pub fn advance(&self, blocks: u64) -> u64 {
        let next = self.current_block().saturating_add(blocks);
        self.advance_to(next);
        next
    }
}
