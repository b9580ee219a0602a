mod allocate;
mod operator_set;
mod slash;
mod wad;

pub use allocate::{AllocateParams, MagnitudeTarget};
pub use operator_set::OperatorSet;
pub use slash::{SlashReceipt, SlashRecord, SlashRequest, SlashedMagnitude, StrategySlash};
pub use wad::{mul_wad_up, WAD};

/// Number of blocks a departing or deallocating operator stays exposed to
/// slashing after giving notice.
pub const DEALLOCATION_DELAY: u64 = 1_209_600;
