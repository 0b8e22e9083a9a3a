use crate::errors::Error;
use crate::events::{
    self, AllocationEvent, PurchaseEvent, RoundsConfiguredEvent, SaleInitializedEvent, SweepEvent,
};
use crate::interfaces::{VaultClient, WhitelistClient};
use crate::ledger::{self, AssetLedger};
use crate::phase;
use crate::storage::*;
use crate::types::*;
use soroban_sdk::{contract, contractimpl, contractmeta, Address, Env, Vec};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Tiered token sale with whitelists and vesting vaults"
);

#[contract]
pub struct TokenSaleContract;

#[contractimpl]
impl TokenSaleContract {
    /// Initialize the token sale contract. The whitelists and vaults named in
    /// `setup` must already be initialized with this contract as owner.
    pub fn initialize(
        env: Env,
        admin: Address,
        setup: SaleSetup,
        closing_time: u64,
    ) -> Result<(), Error> {
        if has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        if setup.minimum_contribution <= 0
            || setup.reserve_supply < 0
            || setup.private_upfront_percent > phase::FULL_PERCENT
        {
            return Err(Error::InvalidConfig);
        }
        let deployed_at = get_ledger_timestamp(&env);
        if closing_time <= deployed_at {
            return Err(Error::InvalidConfig);
        }

        set_admin(&env, &admin);
        set_setup(&env, &setup);
        set_deployed_at(&env, deployed_at);
        set_closing_time(&env, closing_time);
        set_total_raised(&env, 0);

        events::emit_initialized(
            &env,
            SaleInitializedEvent {
                admin,
                asset: setup.asset,
                closing_time,
                deployed_at,
            },
        );
        Ok(())
    }

    /// Set the phase start times, once.
    pub fn initial_schedule(
        env: Env,
        caller: Address,
        private_start: u64,
        round1_start: u64,
        round2_start: u64,
        round3_start: u64,
    ) -> Result<(), Error> {
        require_admin(&env, &caller)?;
        if get_schedule(&env).is_some() {
            return Err(Error::AlreadyConfigured);
        }

        let schedule = SaleSchedule {
            private_start,
            round1_start,
            round2_start,
            round3_start,
            closing_time: get_closing_time(&env)?,
        };
        phase::validate_schedule(get_deployed_at(&env)?, &schedule)?;
        set_schedule(&env, &schedule);

        events::emit_schedule(&env, schedule);
        Ok(())
    }

    /// Set rate and supply ceiling of every sale phase, once.
    pub fn configure_rounds(
        env: Env,
        caller: Address,
        private: RoundTerms,
        round1: RoundTerms,
        round2: RoundTerms,
        round3: RoundTerms,
    ) -> Result<(), Error> {
        require_admin(&env, &caller)?;
        if get_round_terms(&env, Phase::PrivateSale).is_some() {
            return Err(Error::AlreadyConfigured);
        }

        let terms = [private, round1, round2, round3];
        for t in terms.iter() {
            phase::validate_rate(&t.rate)?;
            if t.supply_ceiling <= 0 {
                return Err(Error::InvalidRate);
            }
        }
        for (p, t) in Phase::SALE_PHASES.iter().zip(terms.iter()) {
            set_round_terms(&env, *p, t);
            set_issued(&env, *p, 0);
        }

        let [private, round1, round2, round3] = terms;
        events::emit_rounds(
            &env,
            RoundsConfiguredEvent {
                private,
                round1,
                round2,
                round3,
            },
        );
        Ok(())
    }

    /// Buy tokens for `beneficiary`, paying `value` of the payment asset.
    /// Returns the asset units issued.
    pub fn buy_tokens(
        env: Env,
        payer: Address,
        beneficiary: Address,
        value: i128,
    ) -> Result<i128, Error> {
        Self::process_purchase(&env, &payer, &beneficiary, value)
    }

    /// Plain contribution: the payer buys for itself.
    pub fn receive(env: Env, payer: Address, value: i128) -> Result<i128, Error> {
        Self::process_purchase(&env, &payer, &payer, value)
    }

    pub fn investor_deposit_many(
        env: Env,
        caller: Address,
        addresses: Vec<Address>,
        amounts: Vec<i128>,
    ) -> Result<i128, Error> {
        require_admin(&env, &caller)?;
        Self::allocate(&env, Allocation::Investor, &addresses, &amounts)
    }

    pub fn founder_deposit_many(
        env: Env,
        caller: Address,
        addresses: Vec<Address>,
        amounts: Vec<i128>,
    ) -> Result<i128, Error> {
        require_admin(&env, &caller)?;
        Self::allocate(&env, Allocation::Founder, &addresses, &amounts)
    }

    pub fn add_to_private_whitelist(
        env: Env,
        caller: Address,
        account: Address,
    ) -> Result<bool, Error> {
        require_admin(&env, &caller)?;
        let list = get_setup(&env)?.private_whitelist;
        Ok(Self::add_to_list(&env, list, account))
    }

    pub fn add_to_public_whitelist(
        env: Env,
        caller: Address,
        account: Address,
    ) -> Result<bool, Error> {
        require_admin(&env, &caller)?;
        let list = get_setup(&env)?.public_whitelist;
        Ok(Self::add_to_list(&env, list, account))
    }

    /// Send the configured reserve supply to the reserve wallet, once.
    pub fn allocate_reserve(env: Env, caller: Address) -> Result<i128, Error> {
        require_admin(&env, &caller)?;
        if is_reserve_allocated(&env) {
            return Err(Error::ReserveAlreadyAllocated);
        }
        let setup = get_setup(&env)?;
        let asset = AssetLedger::new(&env, &setup.asset);
        asset.ensure_holdings(setup.reserve_supply)?;

        Self::pay_reserve(&env, &asset, &setup, setup.reserve_supply);
        Ok(setup.reserve_supply)
    }

    /// After closing, sweep every unsold unit to the reserve wallet. A reserve
    /// that was never allocated is paid out first, as far as holdings cover
    /// it, and counts as allocated afterwards. Returns the unsold remainder
    /// swept on top of the reserve.
    pub fn finalize(env: Env, caller: Address) -> Result<i128, Error> {
        require_admin(&env, &caller)?;
        if is_finalized(&env) {
            return Err(Error::AlreadyFinalized);
        }
        let now = get_ledger_timestamp(&env);
        if now < get_closing_time(&env)? {
            return Err(Error::SaleNotClosed);
        }

        let setup = get_setup(&env)?;
        let asset = AssetLedger::new(&env, &setup.asset);
        if !is_reserve_allocated(&env) {
            let reserve = setup.reserve_supply.min(asset.holdings());
            Self::pay_reserve(&env, &asset, &setup, reserve);
        }
        let remainder = asset.holdings();

        set_finalized(&env);
        asset.pay_out(&setup.reserve_wallet, remainder);

        events::emit_finalized(
            &env,
            SweepEvent {
                reserve_wallet: setup.reserve_wallet,
                amount: remainder,
                timestamp: now,
            },
        );
        Ok(remainder)
    }

    // ===== Queries =====

    pub fn total_raised(env: Env) -> i128 {
        get_total_raised(&env)
    }

    pub fn current_phase(env: Env) -> Phase {
        Self::phase_at(env.clone(), get_ledger_timestamp(&env))
    }

    /// `PreSale` until a schedule exists.
    pub fn phase_at(env: Env, at: u64) -> Phase {
        match get_schedule(&env) {
            Some(schedule) => phase::phase_at(at, &schedule),
            None => Phase::PreSale,
        }
    }

    pub fn issued(env: Env, phase: Phase) -> i128 {
        get_issued(&env, phase)
    }

    pub fn remaining(env: Env, phase: Phase) -> i128 {
        match get_round_terms(&env, phase) {
            Some(terms) => terms.supply_ceiling - get_issued(&env, phase),
            None => 0,
        }
    }

    pub fn round_terms(env: Env, phase: Phase) -> Result<RoundTerms, Error> {
        get_round_terms(&env, phase).ok_or(Error::NotConfigured)
    }

    pub fn schedule(env: Env) -> Result<SaleSchedule, Error> {
        get_schedule(&env).ok_or(Error::NotConfigured)
    }

    pub fn setup(env: Env) -> Result<SaleSetup, Error> {
        get_setup(&env)
    }

    pub fn admin(env: Env) -> Result<Address, Error> {
        get_admin(&env)
    }

    pub fn founder_vault(env: Env) -> Result<Address, Error> {
        Ok(get_setup(&env)?.founder_vault)
    }

    pub fn investor_vault(env: Env) -> Result<Address, Error> {
        Ok(get_setup(&env)?.investor_vault)
    }

    pub fn private_sale_vault(env: Env) -> Result<Address, Error> {
        Ok(get_setup(&env)?.private_sale_vault)
    }

    pub fn private_whitelist(env: Env) -> Result<Address, Error> {
        Ok(get_setup(&env)?.private_whitelist)
    }

    pub fn public_whitelist(env: Env) -> Result<Address, Error> {
        Ok(get_setup(&env)?.public_whitelist)
    }

    pub fn is_finalized(env: Env) -> bool {
        is_finalized(&env)
    }
}

impl TokenSaleContract {
    fn process_purchase(
        env: &Env,
        payer: &Address,
        beneficiary: &Address,
        value: i128,
    ) -> Result<i128, Error> {
        payer.require_auth();
        let setup = get_setup(env)?;

        if value < setup.minimum_contribution {
            return Err(Error::BelowMinimum);
        }

        let now = get_ledger_timestamp(env);
        let schedule = get_schedule(env).ok_or(Error::SaleClosed)?;
        let current = phase::phase_at(now, &schedule);
        if !current.is_sale() {
            return Err(Error::SaleClosed);
        }
        let terms = get_round_terms(env, current).ok_or(Error::NotConfigured)?;

        let list = if current.is_public() {
            &setup.public_whitelist
        } else {
            &setup.private_whitelist
        };
        if !WhitelistClient::new(env, list).is_whitelisted(beneficiary) {
            return Err(Error::NotEligible);
        }

        let units = phase::units_for(value, &terms.rate)?;
        if units <= 0 {
            return Err(Error::BelowMinimum);
        }

        // all or nothing: a purchase that does not fit is rejected whole
        let issued = get_issued(env, current);
        if units > terms.supply_ceiling - issued {
            return Err(Error::CapExceeded);
        }

        let asset = AssetLedger::new(env, &setup.asset);
        asset.ensure_holdings(units)?;
        ledger::ensure_payment_funds(env, &setup.payment_asset, payer, value)?;

        let (upfront, vaulted) = if current == Phase::PrivateSale {
            phase::split_private(units, setup.private_upfront_percent)?
        } else {
            (units, 0)
        };
        let vault = VaultClient::new(env, &setup.private_sale_vault);
        if vaulted > 0 {
            let room = vault.get_vault_limit() - vault.get_total_deposit();
            if vaulted > room {
                return Err(Error::VaultLimitExceeded);
            }
        }

        // effects
        set_issued(env, current, issued + units);
        let total_raised = get_total_raised(env)
            .checked_add(value)
            .ok_or(Error::Overflow)?;
        set_total_raised(env, total_raised);

        // interactions
        ledger::forward_payment(env, &setup.payment_asset, payer, &setup.fund_wallet, value);
        asset.pay_out(beneficiary, upfront);
        if vaulted > 0 {
            asset.pay_out(&setup.private_sale_vault, vaulted);
            vault.deposit(beneficiary, &vaulted);
        }

        events::emit_purchase(
            env,
            PurchaseEvent {
                payer: payer.clone(),
                beneficiary: beneficiary.clone(),
                value,
                units,
                vaulted,
                phase: current,
                rate: terms.rate,
                timestamp: now,
            },
        );
        Ok(units)
    }

    fn allocate(
        env: &Env,
        kind: Allocation,
        addresses: &Vec<Address>,
        amounts: &Vec<i128>,
    ) -> Result<i128, Error> {
        if addresses.len() != amounts.len() {
            return Err(Error::LengthMismatch);
        }
        let setup = get_setup(env)?;

        let mut total: i128 = 0;
        for amount in amounts.iter() {
            if amount <= 0 {
                return Err(Error::InvalidAmount);
            }
            total = total.checked_add(amount).ok_or(Error::Overflow)?;
        }

        let vault_address = kind.vault(&setup);
        let vault = VaultClient::new(env, &vault_address);
        if total > vault.get_vault_limit() - vault.get_total_deposit() {
            return Err(Error::VaultLimitExceeded);
        }
        let asset = AssetLedger::new(env, &setup.asset);
        asset.ensure_holdings(total)?;

        asset.pay_out(&vault_address, total);
        for (beneficiary, amount) in addresses.iter().zip(amounts.iter()) {
            vault.deposit(&beneficiary, &amount);
        }

        events::emit_allocation(
            env,
            AllocationEvent {
                kind,
                vault: vault_address,
                recipients: addresses.len(),
                total,
            },
        );
        Ok(total)
    }

    fn pay_reserve(env: &Env, asset: &AssetLedger, setup: &SaleSetup, amount: i128) {
        set_reserve_allocated(env);
        asset.pay_out(&setup.reserve_wallet, amount);

        events::emit_reserve(
            env,
            SweepEvent {
                reserve_wallet: setup.reserve_wallet.clone(),
                amount,
                timestamp: get_ledger_timestamp(env),
            },
        );
    }

    fn add_to_list(env: &Env, list: Address, account: Address) -> bool {
        let added = WhitelistClient::new(env, &list).add(&account);
        if added {
            events::emit_listed(env, list, account);
        }
        added
    }
}

fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    if *caller != get_admin(env)? {
        return Err(Error::Unauthorized);
    }
    Ok(())
}
