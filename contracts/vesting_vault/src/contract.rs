use crate::errors::Error;
use crate::events::{self, DepositEvent, ReleaseEvent, VaultInitializedEvent};
use crate::schedule;
use crate::storage::*;
use crate::types::*;
use soroban_sdk::{contract, contractimpl, contractmeta, token, Address, Env, Vec};

contractmeta!(
    key = "Description",
    val = "Milestone vesting vault fed by a sale contract"
);

#[contract]
pub struct VestingVault;

#[contractimpl]
impl VestingVault {
    /// Configure the vault once, authorized by `admin`. `owner` is the only
    /// address allowed to deposit; `admin` may release on behalf of
    /// beneficiaries.
    pub fn initialize(
        env: Env,
        owner: Address,
        admin: Address,
        asset: Address,
        milestones: Vec<Milestone>,
        limit: i128,
    ) -> Result<(), Error> {
        if has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        if limit <= 0 {
            return Err(Error::InvalidAmount);
        }
        schedule::validate(milestones.iter())?;

        let config = VaultConfig {
            owner: owner.clone(),
            admin: admin.clone(),
            asset: asset.clone(),
            limit,
        };
        set_config(&env, &config);
        set_schedule(&env, &milestones);
        set_total_deposit(&env, 0);
        set_total_released(&env, 0);

        events::emit_initialized(
            &env,
            VaultInitializedEvent {
                owner,
                admin,
                asset,
                limit,
                milestones: milestones.len(),
            },
        );
        Ok(())
    }

    /// Credit `amount` to `beneficiary`. Deposits accumulate. The owner is
    /// expected to have moved the matching asset balance to this vault in
    /// the same invocation.
    pub fn deposit(env: Env, beneficiary: Address, amount: i128) -> Result<(), Error> {
        let config = get_config(&env)?;
        config.owner.require_auth();

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        let vault_total = get_total_deposit(&env)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        if vault_total > config.limit {
            return Err(Error::VaultLimitExceeded);
        }

        let mut deposit = get_deposit(&env, &beneficiary);
        deposit.total_deposited = deposit
            .total_deposited
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        set_deposit(&env, &beneficiary, &deposit);
        set_total_deposit(&env, vault_total);

        events::emit_deposit(
            &env,
            DepositEvent {
                beneficiary,
                amount,
                total_deposited: deposit.total_deposited,
                vault_total,
                timestamp: env.ledger().timestamp(),
            },
        );
        Ok(())
    }

    /// Release everything currently unlocked for the calling beneficiary.
    pub fn release(env: Env, beneficiary: Address) -> Result<i128, Error> {
        beneficiary.require_auth();
        Self::release_unlocked(&env, &beneficiary, &beneficiary)
    }

    /// Administrator path of [`VestingVault::release`]; funds still go to
    /// the beneficiary.
    pub fn release_for(env: Env, caller: Address, beneficiary: Address) -> Result<i128, Error> {
        caller.require_auth();
        let config = get_config(&env)?;
        if caller != config.admin {
            return Err(Error::Unauthorized);
        }
        Self::release_unlocked(&env, &caller, &beneficiary)
    }

    pub fn releasable_amount(env: Env, beneficiary: Address) -> Result<i128, Error> {
        let now = env.ledger().timestamp();
        Self::releasable_amount_at(env, beneficiary, now)
    }

    pub fn releasable_amount_at(env: Env, beneficiary: Address, at: u64) -> Result<i128, Error> {
        let milestones = get_schedule(&env)?;
        let percent = schedule::unlocked_percent_at(milestones.iter(), at);
        schedule::releasable_amount(&get_deposit(&env, &beneficiary), percent)
    }

    pub fn unlocked_percent_at(env: Env, at: u64) -> Result<u32, Error> {
        let milestones = get_schedule(&env)?;
        Ok(schedule::unlocked_percent_at(milestones.iter(), at))
    }

    pub fn get_current_deposit(env: Env, beneficiary: Address) -> i128 {
        get_deposit(&env, &beneficiary).total_deposited
    }

    pub fn get_released(env: Env, beneficiary: Address) -> i128 {
        get_deposit(&env, &beneficiary).total_released
    }

    pub fn get_total_deposit(env: Env) -> i128 {
        get_total_deposit(&env)
    }

    pub fn get_total_released(env: Env) -> i128 {
        get_total_released(&env)
    }

    pub fn get_vault_limit(env: Env) -> Result<i128, Error> {
        Ok(get_config(&env)?.limit)
    }

    pub fn get_schedule(env: Env) -> Result<Vec<Milestone>, Error> {
        get_schedule(&env)
    }

    pub fn get_config(env: Env) -> Result<VaultConfig, Error> {
        get_config(&env)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.owner)
    }

    pub fn admin(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.admin)
    }

    pub fn asset(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.asset)
    }
}

impl VestingVault {
    fn release_unlocked(
        env: &Env,
        released_by: &Address,
        beneficiary: &Address,
    ) -> Result<i128, Error> {
        let config = get_config(env)?;
        let milestones = get_schedule(env)?;
        let percent = schedule::unlocked_percent_at(milestones.iter(), env.ledger().timestamp());

        let mut deposit = get_deposit(env, beneficiary);
        let amount = schedule::releasable_amount(&deposit, percent)?;
        if amount == 0 {
            return Err(Error::NothingToRelease);
        }

        // effects
        deposit.total_released = deposit
            .total_released
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        set_deposit(env, beneficiary, &deposit);
        let total_released = get_total_released(env)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        set_total_released(env, total_released);

        // interactions
        let asset = token::Client::new(env, &config.asset);
        asset.transfer(&env.current_contract_address(), beneficiary, &amount);

        events::emit_release(
            env,
            ReleaseEvent {
                beneficiary: beneficiary.clone(),
                released_by: released_by.clone(),
                amount,
                total_released: deposit.total_released,
                unlocked_percent: percent,
                timestamp: env.ledger().timestamp(),
            },
        );
        Ok(amount)
    }
}
