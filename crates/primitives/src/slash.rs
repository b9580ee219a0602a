use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::OperatorSet;

/// Wad fraction of one strategy's current magnitude to destroy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategySlash {
    pub strategy: Address,
    pub wad_to_slash: u64,
}

impl StrategySlash {
    pub const fn new(strategy: Address, wad_to_slash: u64) -> Self {
        Self { strategy, wad_to_slash }
    }
}

/// A slashing request against one operator in one operator set.
///
/// The description is free-form context for the record; it is logged and
/// stored, never validated. Whether the operator actually misbehaved is
/// outside the ledger: the only gates are slasher identity and the
/// slashability window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlashRequest {
    pub avs: Address,
    pub operator_set_id: u32,
    pub operator: Address,
    pub slashes: Vec<StrategySlash>,
    pub description: String,
}

impl SlashRequest {
    pub fn operator_set(&self) -> OperatorSet {
        OperatorSet::new(self.avs, self.operator_set_id)
    }
}

/// Magnitude destroyed on one strategy by an applied slash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlashedMagnitude {
    pub strategy: Address,
    pub magnitude: u64,
}

/// Outcome of an applied slash: its id and the per-strategy amounts, in
/// request order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlashReceipt {
    pub slash_id: u64,
    pub slashed: Vec<SlashedMagnitude>,
}

impl SlashReceipt {
    /// Total magnitude destroyed across all strategies.
    pub fn total_slashed(&self) -> u128 {
        self.slashed.iter().map(|entry| entry.magnitude as u128).sum()
    }
}

/// Immutable audit record of an applied slash. There is no operation that
/// amends or removes one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlashRecord {
    pub slash_id: u64,
    pub operator_set: OperatorSet,
    pub operator: Address,
    pub slashed: Vec<SlashedMagnitude>,
    pub description: String,
    pub block: u64,
}
