use crate::errors::Error;
use crate::types::*;
use soroban_sdk::{Address, Env};

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_setup(env: &Env) -> Result<SaleSetup, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Setup)
        .ok_or(Error::NotInitialized)
}

pub fn set_setup(env: &Env, setup: &SaleSetup) {
    env.storage().instance().set(&DataKey::Setup, setup);
}

pub fn get_deployed_at(env: &Env) -> Result<u64, Error> {
    env.storage()
        .instance()
        .get(&DataKey::DeployedAt)
        .ok_or(Error::NotInitialized)
}

pub fn set_deployed_at(env: &Env, timestamp: u64) {
    env.storage().instance().set(&DataKey::DeployedAt, &timestamp);
}

pub fn get_closing_time(env: &Env) -> Result<u64, Error> {
    env.storage()
        .instance()
        .get(&DataKey::ClosingTime)
        .ok_or(Error::NotInitialized)
}

pub fn set_closing_time(env: &Env, timestamp: u64) {
    env.storage().instance().set(&DataKey::ClosingTime, &timestamp);
}

pub fn get_schedule(env: &Env) -> Option<SaleSchedule> {
    env.storage().instance().get(&DataKey::Schedule)
}

pub fn set_schedule(env: &Env, schedule: &SaleSchedule) {
    env.storage().instance().set(&DataKey::Schedule, schedule);
}

pub fn get_round_terms(env: &Env, phase: Phase) -> Option<RoundTerms> {
    env.storage().instance().get(&DataKey::Terms(phase))
}

pub fn set_round_terms(env: &Env, phase: Phase, terms: &RoundTerms) {
    env.storage().instance().set(&DataKey::Terms(phase), terms);
}

pub fn get_issued(env: &Env, phase: Phase) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::Issued(phase))
        .unwrap_or(0)
}

pub fn set_issued(env: &Env, phase: Phase, amount: i128) {
    env.storage().instance().set(&DataKey::Issued(phase), &amount);
}

pub fn get_total_raised(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalRaised)
        .unwrap_or(0)
}

pub fn set_total_raised(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::TotalRaised, &amount);
}

pub fn is_reserve_allocated(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::ReserveAllocated)
        .unwrap_or(false)
}

pub fn set_reserve_allocated(env: &Env) {
    env.storage().instance().set(&DataKey::ReserveAllocated, &true);
}

pub fn is_finalized(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Finalized)
        .unwrap_or(false)
}

pub fn set_finalized(env: &Env) {
    env.storage().instance().set(&DataKey::Finalized, &true);
}
