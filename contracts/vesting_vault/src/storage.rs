use crate::errors::Error;
use crate::types::*;
use soroban_sdk::{Address, Env, Vec};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;
/// Deposit records are bumped to this many ledgers on every write.
pub(crate) const DEPOSIT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const DEPOSIT_LIFETIME_THRESHOLD: u32 = DEPOSIT_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<VaultConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &VaultConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_schedule(env: &Env) -> Result<Vec<Milestone>, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Schedule)
        .ok_or(Error::NotInitialized)
}

pub fn set_schedule(env: &Env, schedule: &Vec<Milestone>) {
    env.storage().instance().set(&DataKey::Schedule, schedule);
}

pub fn get_total_deposit(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalDeposit)
        .unwrap_or(0)
}

pub fn set_total_deposit(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::TotalDeposit, &amount);
}

pub fn get_total_released(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalReleased)
        .unwrap_or(0)
}

pub fn set_total_released(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::TotalReleased, &amount);
}

pub fn get_deposit(env: &Env, beneficiary: &Address) -> Deposit {
    env.storage()
        .persistent()
        .get(&DataKey::Deposit(beneficiary.clone()))
        .unwrap_or_default()
}

pub fn set_deposit(env: &Env, beneficiary: &Address, deposit: &Deposit) {
    let key = DataKey::Deposit(beneficiary.clone());
    env.storage().persistent().set(&key, deposit);
    env.storage()
        .persistent()
        .extend_ttl(&key, DEPOSIT_LIFETIME_THRESHOLD, DEPOSIT_BUMP_AMOUNT);
}
