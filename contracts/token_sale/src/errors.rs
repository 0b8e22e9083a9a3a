use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidConfig = 4,
    AlreadyConfigured = 5,
    NotConfigured = 6,
    /// Phase boundaries must strictly increase and not predate deployment.
    InvalidOrdering = 7,
    InvalidRate = 8,
    BelowMinimum = 9,
    SaleClosed = 10,
    NotEligible = 11,
    CapExceeded = 12,
    LengthMismatch = 13,
    InvalidAmount = 14,
    VaultLimitExceeded = 15,
    InsufficientHoldings = 16,
    InsufficientFunds = 17,
    ReserveAlreadyAllocated = 18,
    SaleNotClosed = 19,
    AlreadyFinalized = 20,
    Overflow = 21,
}
