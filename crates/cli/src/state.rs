use std::{fs, path::Path};

use eyre::{Context, Result};
use talion_ledger::{Ledger, LedgerSnapshot};
use tracing::debug;

/// Loads the ledger from the snapshot file at `path`, or starts a fresh one
/// if no file exists yet.
pub fn load_ledger(path: &Path) -> Result<Ledger> {
    if !path.exists() {
        debug!("No state file at {}, starting from an empty ledger", path.display());
        return Ok(Ledger::default());
    }
    let raw = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read state file {}", path.display()))?;
    let snapshot: LedgerSnapshot = serde_json::from_str(&raw)
        .wrap_err_with(|| format!("State file {} is not a valid ledger snapshot", path.display()))?;
    Ok(Ledger::from_snapshot(snapshot))
}

/// Writes the ledger snapshot to `path` as pretty-printed JSON.
pub fn save_ledger(path: &Path, ledger: &Ledger) -> Result<()> {
    let encoded = serde_json::to_string_pretty(&ledger.snapshot())?;
    fs::write(path, encoded)
        .wrap_err_with(|| format!("Failed to write state file {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use talion_primitives::OperatorSet;

    #[test]
    fn a_missing_file_yields_an_empty_ledger() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = load_ledger(&dir.path().join("absent.json")).unwrap();
        assert!(ledger.snapshot().operator_sets.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let avs = address!("0x0000777735367b36bC9B61C50022d9D0700dB4Ec");
        let ledger = Ledger::default();
        ledger.clock().advance_to(7);
        ledger.create_set(OperatorSet::new(avs, 3), vec![], avs).unwrap();
        save_ledger(&path, &ledger).unwrap();

        let reloaded = load_ledger(&path).unwrap();
        assert_eq!(reloaded.snapshot(), ledger.snapshot());
        assert_eq!(reloaded.clock().current_block(), 7);
    }

    #[test]
    fn a_corrupt_file_is_reported_not_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "not json").unwrap();
        assert!(load_ledger(&path).is_err());
    }
}
