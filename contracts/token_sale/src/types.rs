use soroban_sdk::{contracttype, Address, Env};

/// Sale phases in time order. Which one is active is derived from the
/// ledger clock, never stored.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum Phase {
    PreSale,
    PrivateSale,
    PublicRound1,
    PublicRound2,
    PublicRound3,
    Closed,
}

impl Phase {
    /// Phases that accept contributions.
    pub const SALE_PHASES: [Phase; 4] = [
        Phase::PrivateSale,
        Phase::PublicRound1,
        Phase::PublicRound2,
        Phase::PublicRound3,
    ];

    pub fn is_sale(&self) -> bool {
        !matches!(self, Phase::PreSale | Phase::Closed)
    }

    pub fn is_public(&self) -> bool {
        matches!(
            self,
            Phase::PublicRound1 | Phase::PublicRound2 | Phase::PublicRound3
        )
    }
}

/// Asset units issued per unit of contributed value, as the exact
/// fraction `units / per_value`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Rate {
    pub units: i128,
    pub per_value: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct RoundTerms {
    pub rate: Rate,
    pub supply_ceiling: i128, // asset units issuable in this phase
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleSchedule {
    pub private_start: u64,
    pub round1_start: u64,
    pub round2_start: u64,
    pub round3_start: u64,
    pub closing_time: u64, // round 3 end
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleSetup {
    pub asset: Address,         // token being sold
    pub payment_asset: Address, // token contributions are paid in
    pub fund_wallet: Address,   // receives every contribution
    pub reserve_wallet: Address,
    pub founder_vault: Address,
    pub investor_vault: Address,
    pub private_sale_vault: Address,
    pub private_whitelist: Address,
    pub public_whitelist: Address,
    pub minimum_contribution: i128,
    pub reserve_supply: i128,
    /// Share of a private-sale purchase paid out immediately; the rest is
    /// locked in the private-sale vault.
    pub private_upfront_percent: u32,
}

/// Administrator allocation paths that bypass rate and cap logic.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum Allocation {
    Founder,
    Investor,
}

impl Allocation {
    pub fn vault(&self, setup: &SaleSetup) -> Address {
        match self {
            Allocation::Founder => setup.founder_vault.clone(),
            Allocation::Investor => setup.investor_vault.clone(),
        }
    }
}

#[contracttype]
pub enum DataKey {
    Admin,
    Setup,
    DeployedAt,
    ClosingTime,
    Schedule,
    Terms(Phase),
    Issued(Phase),
    TotalRaised,
    ReserveAllocated,
    Finalized,
}

pub fn get_ledger_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}
