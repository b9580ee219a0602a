mod allocation;
mod clock;
mod error;
mod ledger;
mod membership;
mod registry;
mod snapshot;

pub use allocation::Allocation;
pub use clock::BlockClock;
pub use error::{LedgerError, LedgerResult};
pub use ledger::Ledger;
pub use membership::RegistrationStatus;
pub use registry::SetRecord;
pub use snapshot::{
    AllocationEntry, LedgerSnapshot, MaxMagnitudeEntry, OperatorSetEntry, RegistrationEntry,
};
