use std::path::PathBuf;

use alloy_primitives::Address;
use clap::Parser;
use eyre::Result;
use tracing::info;

use crate::state;

#[derive(Debug, Parser)]
pub struct StatusCommand {
    /// Path of the ledger state file
    #[clap(long, env = "TALION_STATE", default_value = "talion-state.json")]
    state: PathBuf,

    /// Only show sets owned by this AVS
    #[clap(long)]
    avs: Option<Address>,

    /// Only show the set with this ID
    #[clap(long)]
    operator_set_id: Option<u32>,

    /// Also report this operator's registration and allocations
    #[clap(long)]
    operator: Option<Address>,
}

impl StatusCommand {
    pub fn execute(&self) -> Result<()> {
        let ledger = state::load_ledger(&self.state)?;
        let snapshot = ledger.snapshot();
        info!(
            "Ledger at block {}: {} operator set(s), {} slash record(s)",
            snapshot.current_block,
            snapshot.operator_sets.len(),
            snapshot.slash_records.len()
        );

        for entry in &snapshot.operator_sets {
            if self.avs.is_some_and(|avs| avs != entry.set.avs) {
                continue;
            }
            if self.operator_set_id.is_some_and(|id| id != entry.set.id) {
                continue;
            }
            info!(
                "Set {}: slasher {}, {} strategies",
                entry.set,
                entry.slasher,
                entry.strategies.len()
            );

            let Some(operator) = self.operator else { continue };
            match ledger.registration(operator, entry.set) {
                Some(status) if status.registered => {
                    info!("  operator {}: registered, slashable", operator)
                }
                Some(status) => info!(
                    "  operator {}: departed, slashable until block {} (window {})",
                    operator,
                    status.slashable_until,
                    if ledger.is_slashable(operator, entry.set) { "open" } else { "closed" }
                ),
                None => info!("  operator {}: never registered", operator),
            }
            for &strategy in &entry.strategies {
                let cell = ledger.allocation(operator, entry.set, strategy);
                let max = ledger.max_magnitude(operator, strategy);
                if cell.has_pending() {
                    info!(
                        "  strategy {}: magnitude {} of max {}, {} pending at block {}",
                        strategy,
                        cell.current_magnitude,
                        max,
                        cell.pending_delta,
                        cell.effect_block
                    );
                } else {
                    info!(
                        "  strategy {}: magnitude {} of max {}",
                        strategy, cell.current_magnitude, max
                    );
                }
            }
        }
        Ok(())
    }
}
