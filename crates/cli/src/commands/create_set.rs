use std::path::PathBuf;

use alloy_primitives::Address;
use clap::Parser;
use eyre::Result;
use talion_primitives::OperatorSet;
use tracing::info;

use crate::state;

#[derive(Debug, Parser)]
pub struct CreateSetCommand {
    /// Path of the ledger state file
    #[clap(long, env = "TALION_STATE", default_value = "talion-state.json")]
    state: PathBuf,

    /// Block height to advance the ledger clock to before executing
    #[clap(long)]
    block: Option<u64>,

    /// AVS address that administers the new set
    #[clap(long)]
    avs: Address,

    /// Numeric id of the new set within the AVS
    #[clap(long)]
    id: u32,

    /// Strategies the set allocates against (comma-separated addresses)
    #[clap(long, value_delimiter = ',')]
    strategies: Vec<Address>,

    /// The one address authorized to slash through this set
    #[clap(long)]
    slasher: Address,
}

impl CreateSetCommand {
    pub fn execute(&self) -> Result<()> {
        let ledger = state::load_ledger(&self.state)?;
        if let Some(block) = self.block {
            ledger.clock().advance_to(block);
        }

        let set = OperatorSet::new(self.avs, self.id);
        ledger.create_set(set, self.strategies.clone(), self.slasher)?;
        info!(
            "Operator set {} created with {} strategies, slasher {}",
            set,
            self.strategies.len(),
            self.slasher
        );

        state::save_ledger(&self.state, &ledger)
    }
}
