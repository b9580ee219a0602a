use alloy_primitives::Address;
use talion_primitives::OperatorSet;
use thiserror::Error;

/// Validation failures surfaced by ledger operations. Every failure is
/// synchronous and pre-commit: a call that returns an error has written
/// nothing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("caller {caller} is not the slasher for operator set {set}")]
    Unauthorized { set: OperatorSet, caller: Address },

    #[error("operator {operator} is not slashable for operator set {set} at block {block}")]
    NotSlashable { set: OperatorSet, operator: Address, block: u64 },

    #[error("allocation for strategy {strategy} is already at magnitude {magnitude}")]
    NoChange { strategy: Address, magnitude: u64 },

    #[error("requested magnitude {requested} for strategy {strategy} exceeds max magnitude {max}")]
    InsufficientCeiling { strategy: Address, requested: u64, max: u64 },

    #[error("operator set {set} already exists")]
    DuplicateSet { set: OperatorSet },
}

pub type LedgerResult<T> = Result<T, LedgerError>;
