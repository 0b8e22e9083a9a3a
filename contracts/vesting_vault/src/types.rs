use soroban_sdk::{contracttype, Address};

/// One step of a vesting schedule: from `time` on, `percent` of every
/// deposit is unlocked (cumulative).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Milestone {
    pub time: u64,
    pub percent: u32,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct VaultConfig {
    pub owner: Address, // sale contract, the only depositor
    pub admin: Address, // may release on behalf of beneficiaries
    pub asset: Address,
    pub limit: i128,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct Deposit {
    pub total_deposited: i128,
    pub total_released: i128,
}

#[contracttype]
pub enum DataKey {
    Config,
    Schedule,
    TotalDeposit,
    TotalReleased,
    Deposit(Address),
}
