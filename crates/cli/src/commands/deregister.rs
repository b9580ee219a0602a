use std::path::PathBuf;

use alloy_primitives::Address;
use clap::Parser;
use eyre::Result;
use talion_primitives::{OperatorSet, DEALLOCATION_DELAY};
use tracing::info;

use crate::state;

#[derive(Debug, Parser)]
pub struct DeregisterCommand {
    /// Path of the ledger state file
    #[clap(long, env = "TALION_STATE", default_value = "talion-state.json")]
    state: PathBuf,

    /// Block height to advance the ledger clock to before executing
    #[clap(long)]
    block: Option<u64>,

    /// Operator address leaving the sets
    #[clap(long)]
    operator: Address,

    /// AVS address owning the operator sets
    #[clap(long)]
    avs: Address,

    /// Operator set IDs to leave (comma-separated list of uint32 values)
    #[clap(long, value_delimiter = ',')]
    operator_set_ids: Vec<u32>,
}

impl DeregisterCommand {
    pub fn execute(&self) -> Result<()> {
        let ledger = state::load_ledger(&self.state)?;
        if let Some(block) = self.block {
            ledger.clock().advance_to(block);
        }

        let sets: Vec<OperatorSet> =
            self.operator_set_ids.iter().map(|&id| OperatorSet::new(self.avs, id)).collect();
        let leave_block = ledger.clock().current_block();
        ledger.deregister(self.operator, &sets);
        info!(
            "Operator {} left sets {:?} of AVS {}; slashable until block {}",
            self.operator,
            self.operator_set_ids,
            self.avs,
            leave_block.saturating_add(DEALLOCATION_DELAY)
        );

        state::save_ledger(&self.state, &ledger)
    }
}
