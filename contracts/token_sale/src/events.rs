use crate::types::{Allocation, Phase, Rate, RoundTerms, SaleSchedule};
use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleInitializedEvent {
    pub admin: Address,
    pub asset: Address,
    pub closing_time: u64,
    pub deployed_at: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct RoundsConfiguredEvent {
    pub private: RoundTerms,
    pub round1: RoundTerms,
    pub round2: RoundTerms,
    pub round3: RoundTerms,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PurchaseEvent {
    pub payer: Address,
    pub beneficiary: Address,
    pub value: i128,
    pub units: i128,
    pub vaulted: i128,
    pub phase: Phase,
    pub rate: Rate,
    pub timestamp: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct AllocationEvent {
    pub kind: Allocation,
    pub vault: Address,
    pub recipients: u32,
    pub total: i128,
}

/// Asset moved to the reserve wallet, either the initial reserve or the
/// unsold remainder at finalization.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SweepEvent {
    pub reserve_wallet: Address,
    pub amount: i128,
    pub timestamp: u64,
}

pub fn emit_initialized(env: &Env, event: SaleInitializedEvent) {
    env.events().publish((symbol_short!("init"),), event);
}

pub fn emit_schedule(env: &Env, schedule: SaleSchedule) {
    env.events().publish((symbol_short!("schedule"),), schedule);
}

pub fn emit_rounds(env: &Env, event: RoundsConfiguredEvent) {
    env.events().publish((symbol_short!("rounds"),), event);
}

pub fn emit_purchase(env: &Env, event: PurchaseEvent) {
    env.events()
        .publish((symbol_short!("purchase"), event.beneficiary.clone()), event);
}

pub fn emit_allocation(env: &Env, event: AllocationEvent) {
    env.events()
        .publish((symbol_short!("alloc"), event.vault.clone()), event);
}

pub fn emit_listed(env: &Env, list: Address, account: Address) {
    env.events()
        .publish((symbol_short!("listed"), account), list);
}

pub fn emit_reserve(env: &Env, event: SweepEvent) {
    env.events().publish((symbol_short!("reserve"),), event);
}

pub fn emit_finalized(env: &Env, event: SweepEvent) {
    env.events().publish((symbol_short!("final"),), event);
}
