use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    /// Milestones must be strictly increasing in time and percent, end at 100.
    InvalidSchedule = 4,
    InvalidAmount = 5,
    VaultLimitExceeded = 6,
    NothingToRelease = 7,
    Overflow = 8,
}
