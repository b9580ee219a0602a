use std::path::PathBuf;

use alloy_primitives::Address;
use clap::Parser;
use eyre::Result;
use talion_primitives::OperatorSet;
use tracing::info;

use crate::state;

#[derive(Debug, Parser)]
pub struct SettleCommand {
    /// Path of the ledger state file
    #[clap(long, env = "TALION_STATE", default_value = "talion-state.json")]
    state: PathBuf,

    /// Block height to advance the ledger clock to before executing
    #[clap(long)]
    block: Option<u64>,

    /// Operator address whose scheduled changes to settle
    #[clap(long)]
    operator: Address,

    /// AVS address owning the operator set
    #[clap(long)]
    avs: Address,

    /// Operator set ID
    #[clap(long)]
    operator_set_id: u32,

    /// Strategies to settle (comma-separated addresses)
    #[clap(long, value_delimiter = ',')]
    strategies: Vec<Address>,
}

impl SettleCommand {
    pub fn execute(&self) -> Result<()> {
        let ledger = state::load_ledger(&self.state)?;
        if let Some(block) = self.block {
            ledger.clock().advance_to(block);
        }

        let set = OperatorSet::new(self.avs, self.operator_set_id);
        let settled = ledger.settle(self.operator, set, &self.strategies);
        info!(
            "Settled {} of {} strategies for operator {} in set {}",
            settled,
            self.strategies.len(),
            self.operator,
            set
        );

        state::save_ledger(&self.state, &ledger)
    }
}
