use std::path::PathBuf;

use alloy_primitives::Address;
use clap::Parser;
use eyre::{bail, Result};
use talion_primitives::{SlashRequest, StrategySlash};
use tracing::info;

use crate::state;

#[derive(Debug, Parser)]
pub struct SlashCommand {
    /// Path of the ledger state file
    #[clap(long, env = "TALION_STATE", default_value = "talion-state.json")]
    state: PathBuf,

    /// Block height to advance the ledger clock to before executing
    #[clap(long)]
    block: Option<u64>,

    /// Calling address, checked against the slasher on record for the set
    #[clap(long)]
    caller: Address,

    /// AVS address owning the operator set
    #[clap(long)]
    avs: Address,

    /// Operator set ID
    #[clap(long)]
    operator_set_id: u32,

    /// Operator to slash
    #[clap(long)]
    operator: Address,

    /// Strategies to slash (comma-separated addresses)
    #[clap(long, value_delimiter = ',')]
    strategies: Vec<Address>,

    /// Wad fraction of each strategy's magnitude to destroy, one per
    /// strategy (comma-separated, 1000000000000000000 = 100%)
    #[clap(long, value_delimiter = ',')]
    wads: Vec<u64>,

    /// Human-readable reason recorded with the slash
    #[clap(long, default_value = "")]
    description: String,
}

impl SlashCommand {
    pub fn execute(&self) -> Result<()> {
        if self.strategies.len() != self.wads.len() {
            bail!(
                "Expected one wad fraction per strategy, got {} strategies and {} wads",
                self.strategies.len(),
                self.wads.len()
            );
        }

        let ledger = state::load_ledger(&self.state)?;
        if let Some(block) = self.block {
            ledger.clock().advance_to(block);
        }

        let slashes: Vec<StrategySlash> = self
            .strategies
            .iter()
            .zip(&self.wads)
            .map(|(&strategy, &wad)| StrategySlash::new(strategy, wad))
            .collect();
        let request = SlashRequest {
            avs: self.avs,
            operator_set_id: self.operator_set_id,
            operator: self.operator,
            slashes,
            description: self.description.clone(),
        };

        let receipt = ledger.slash(self.caller, &request)?;
        info!(
            "Slash {} applied: {} magnitude destroyed across {} strategies",
            receipt.slash_id,
            receipt.total_slashed(),
            receipt.slashed.len()
        );
        for entry in &receipt.slashed {
            info!("  strategy {}: {} magnitude destroyed", entry.strategy, entry.magnitude);
        }

        state::save_ledger(&self.state, &ledger)
    }
}
