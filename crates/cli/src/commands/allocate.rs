use std::path::PathBuf;

use alloy_primitives::Address;
use clap::Parser;
use eyre::{bail, Result};
use talion_primitives::{AllocateParams, MagnitudeTarget, OperatorSet};
use tracing::info;

use crate::state;

#[derive(Debug, Parser)]
pub struct AllocateCommand {
    /// Path of the ledger state file
    #[clap(long, env = "TALION_STATE", default_value = "talion-state.json")]
    state: PathBuf,

    /// Block height to advance the ledger clock to before executing
    #[clap(long)]
    block: Option<u64>,

    /// Operator address whose allocations change
    #[clap(long)]
    operator: Address,

    /// AVS address owning the operator set
    #[clap(long)]
    avs: Address,

    /// Operator set ID
    #[clap(long)]
    operator_set_id: u32,

    /// Strategies to retarget (comma-separated addresses)
    #[clap(long, value_delimiter = ',')]
    strategies: Vec<Address>,

    /// New absolute magnitudes, one per strategy (comma-separated)
    #[clap(long, value_delimiter = ',')]
    new_magnitudes: Vec<u64>,
}

impl AllocateCommand {
    pub fn execute(&self) -> Result<()> {
        if self.strategies.len() != self.new_magnitudes.len() {
            bail!(
                "Expected one magnitude per strategy, got {} strategies and {} magnitudes",
                self.strategies.len(),
                self.new_magnitudes.len()
            );
        }

        let ledger = state::load_ledger(&self.state)?;
        if let Some(block) = self.block {
            ledger.clock().advance_to(block);
        }

        let set = OperatorSet::new(self.avs, self.operator_set_id);
        let targets: Vec<MagnitudeTarget> = self
            .strategies
            .iter()
            .zip(&self.new_magnitudes)
            .map(|(&strategy, &magnitude)| MagnitudeTarget::new(strategy, magnitude))
            .collect();

        let effect_blocks =
            ledger.modify_allocations(self.operator, &[AllocateParams::new(set, targets)])?;

        let now = ledger.clock().current_block();
        for (&strategy, &effect_block) in self.strategies.iter().zip(&effect_blocks) {
            if effect_block > now {
                info!(
                    "Decrease for strategy {} scheduled, effective at block {}",
                    strategy, effect_block
                );
            } else {
                info!("New magnitude for strategy {} applied at block {}", strategy, now);
            }
        }

        state::save_ledger(&self.state, &ledger)
    }
}
