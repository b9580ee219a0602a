use std::fmt;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// Identity of an operator set: the administering AVS and a numeric id.
/// Immutable once created; creation binds it to exactly one slasher and a
/// fixed list of eligible strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OperatorSet {
    pub avs: Address,
    pub id: u32,
}

impl OperatorSet {
    pub const fn new(avs: Address, id: u32) -> Self {
        Self { avs, id }
    }
}

impl fmt::Display for OperatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.avs, self.id)
    }
}
