use std::path::PathBuf;

use clap::Parser;
use eyre::{bail, Result};
use talion_primitives::SlashRecord;
use tracing::info;

use crate::state;

#[derive(Debug, Parser)]
pub struct HistoryCommand {
    /// Path of the ledger state file
    #[clap(long, env = "TALION_STATE", default_value = "talion-state.json")]
    state: PathBuf,

    /// Only show the record with this slash ID
    #[clap(long)]
    slash_id: Option<u64>,
}

impl HistoryCommand {
    pub fn execute(&self) -> Result<()> {
        let ledger = state::load_ledger(&self.state)?;
        match self.slash_id {
            Some(id) => match ledger.slash_record(id) {
                Some(record) => print_record(&record),
                None => bail!("No slash record with id {}", id),
            },
            None => {
                let records = ledger.slash_records();
                info!("{} slash record(s)", records.len());
                for record in &records {
                    print_record(record);
                }
            }
        }
        Ok(())
    }
}

fn print_record(record: &SlashRecord) {
    info!(
        "Slash {} at block {}: operator {} in set {} ({})",
        record.slash_id, record.block, record.operator, record.operator_set, record.description
    );
    for entry in &record.slashed {
        info!("  strategy {}: {} magnitude destroyed", entry.strategy, entry.magnitude);
    }
}
