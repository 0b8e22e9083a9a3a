#![allow(dead_code)]

use buyer_whitelist::{BuyerWhitelist, BuyerWhitelistClient};
use soroban_sdk::testutils::{Address as _, Events, Ledger};
use soroban_sdk::{token, vec, Address, Env, Symbol, TryFromVal, Val, Vec};
use token_sale::{Rate, RoundTerms, SaleSetup, TokenSaleContract, TokenSaleContractClient};
use vesting_vault::{Milestone, VestingVault, VestingVaultClient};

pub const UNIT: i128 = 1_000_000_000_000_000_000;
pub const MILLION: i128 = 1_000_000;

pub const TOTAL_SUPPLY: i128 = 200 * MILLION * UNIT;
pub const RESERVE_SUPPLY: i128 = 30 * MILLION * UNIT;
pub const FOUNDER_LIMIT: i128 = 50 * MILLION * UNIT;
pub const INVESTOR_LIMIT: i128 = 20 * MILLION * UNIT;
pub const PRIVATE_LIMIT: i128 = 50 * MILLION * UNIT;
pub const MINIMUM: i128 = UNIT / 100;

pub const DEPLOYED_AT: u64 = 1_521_079_200;
pub const PRIVATE_START: u64 = 1_521_511_200;
pub const ROUND1_START: u64 = 1_525_053_600;
pub const ROUND2_START: u64 = 1_525_485_600;
pub const ROUND3_START: u64 = 1_525_917_600;
pub const CLOSING_TIME: u64 = 1_526_349_600;
pub const UNLOCK_TIME: u64 = 1_536_976_800;
pub const YEAR_1: u64 = 1_552_615_200;
pub const YEAR_2: u64 = 1_584_237_600;
pub const YEAR_3: u64 = 1_615_773_600;
pub const YEAR_4: u64 = 1_647_309_600;

pub struct SaleTest<'a> {
    pub env: &'a Env,
    pub client: TokenSaleContractClient<'a>,
    pub admin: Address,
    pub fund_wallet: Address,
    pub reserve_wallet: Address,
    pub asset: token::Client<'a>,
    pub payment: token::Client<'a>,
    pub payment_admin: token::StellarAssetClient<'a>,
    pub founder_vault: VestingVaultClient<'a>,
    pub investor_vault: VestingVaultClient<'a>,
    pub private_vault: VestingVaultClient<'a>,
    pub private_list: BuyerWhitelistClient<'a>,
    pub public_list: BuyerWhitelistClient<'a>,
}

pub fn set_time(env: &Env, timestamp: u64) {
    env.ledger().with_mut(|l| l.timestamp = timestamp);
}

/// Price-based terms: `price` gwei of payment per whole token.
pub fn priced(price: i128, ceiling: i128) -> RoundTerms {
    RoundTerms {
        rate: Rate {
            units: 1_000_000_000,
            per_value: price,
        },
        supply_ceiling: ceiling,
    }
}

pub fn flat(units_per_value: i128, ceiling: i128) -> RoundTerms {
    RoundTerms {
        rate: Rate {
            units: units_per_value,
            per_value: 1,
        },
        supply_ceiling: ceiling,
    }
}

/// Rates and ceilings of the reference deployment.
pub fn default_rounds() -> [RoundTerms; 4] {
    [
        priced(588_000, 50 * MILLION * UNIT),
        priced(788_000, 10 * MILLION * UNIT),
        priced(824_000, 15 * MILLION * UNIT),
        priced(859_000, 25 * MILLION * UNIT),
    ]
}

fn founder_schedule(env: &Env) -> Vec<Milestone> {
    vec![
        env,
        Milestone { time: DEPLOYED_AT, percent: 20 },
        Milestone { time: YEAR_1, percent: 40 },
        Milestone { time: YEAR_2, percent: 60 },
        Milestone { time: YEAR_3, percent: 80 },
        Milestone { time: YEAR_4, percent: 100 },
    ]
}

fn cliff_schedule(env: &Env) -> Vec<Milestone> {
    vec![env, Milestone { time: UNLOCK_TIME, percent: 100 }]
}

fn deploy_vault<'a>(
    env: &'a Env,
    owner: &Address,
    admin: &Address,
    asset: &Address,
    milestones: Vec<Milestone>,
    limit: i128,
) -> VestingVaultClient<'a> {
    let id = env.register_contract(None, VestingVault);
    let vault = VestingVaultClient::new(env, &id);
    vault.initialize(owner, admin, asset, &milestones, &limit);
    vault
}

fn deploy_whitelist<'a>(
    env: &'a Env,
    admin: &Address,
    owner: &Address,
) -> BuyerWhitelistClient<'a> {
    let id = env.register_contract(None, BuyerWhitelist);
    let list = BuyerWhitelistClient::new(env, &id);
    list.initialize(admin, owner);
    list
}

/// Deploy with the reference rates and a 60 % private upfront share.
pub fn setup_sale(env: &Env) -> SaleTest<'_> {
    setup_sale_with(env, 60, default_rounds())
}

/// Deploy every contract, fund the sale with the full supply and configure
/// schedule and rounds. The clock is left at deployment time.
pub fn setup_sale_with(env: &Env, upfront_percent: u32, rounds: [RoundTerms; 4]) -> SaleTest<'_> {
    env.mock_all_auths();
    set_time(env, DEPLOYED_AT);

    let admin = Address::generate(env);
    let fund_wallet = Address::generate(env);
    let reserve_wallet = Address::generate(env);

    let issuer = Address::generate(env);
    let asset_id = env.register_stellar_asset_contract_v2(issuer.clone()).address();
    let payment_id = env.register_stellar_asset_contract_v2(issuer).address();

    let sale_id = env.register_contract(None, TokenSaleContract);
    let client = TokenSaleContractClient::new(env, &sale_id);

    let vault = |milestones: Vec<Milestone>, limit: i128| {
        deploy_vault(env, &sale_id, &admin, &asset_id, milestones, limit)
    };
    let founder_vault = vault(founder_schedule(env), FOUNDER_LIMIT);
    let investor_vault = vault(cliff_schedule(env), INVESTOR_LIMIT);
    let private_vault = vault(cliff_schedule(env), PRIVATE_LIMIT);
    let private_list = deploy_whitelist(env, &admin, &sale_id);
    let public_list = deploy_whitelist(env, &admin, &sale_id);

    let setup = SaleSetup {
        asset: asset_id.clone(),
        payment_asset: payment_id.clone(),
        fund_wallet: fund_wallet.clone(),
        reserve_wallet: reserve_wallet.clone(),
        founder_vault: founder_vault.address.clone(),
        investor_vault: investor_vault.address.clone(),
        private_sale_vault: private_vault.address.clone(),
        private_whitelist: private_list.address.clone(),
        public_whitelist: public_list.address.clone(),
        minimum_contribution: MINIMUM,
        reserve_supply: RESERVE_SUPPLY,
        private_upfront_percent: upfront_percent,
    };
    client.initialize(&admin, &setup, &CLOSING_TIME);
    client.initial_schedule(&admin, &PRIVATE_START, &ROUND1_START, &ROUND2_START, &ROUND3_START);
    let [private, round1, round2, round3] = rounds;
    client.configure_rounds(&admin, &private, &round1, &round2, &round3);

    token::StellarAssetClient::new(env, &asset_id).mint(&sale_id, &TOTAL_SUPPLY);

    SaleTest {
        env,
        client,
        admin,
        fund_wallet,
        reserve_wallet,
        asset: token::Client::new(env, &asset_id),
        payment: token::Client::new(env, &payment_id),
        payment_admin: token::StellarAssetClient::new(env, &payment_id),
        founder_vault,
        investor_vault,
        private_vault,
        private_list,
        public_list,
    }
}

impl SaleTest<'_> {
    /// A fresh contributor holding `funds` of the payment asset.
    pub fn contributor(&self, funds: i128) -> Address {
        let who = Address::generate(self.env);
        if funds > 0 {
            self.payment_admin.mint(&who, &funds);
        }
        who
    }

    pub fn private_buyer(&self, funds: i128) -> Address {
        let who = self.contributor(funds);
        self.client.add_to_private_whitelist(&self.admin, &who);
        who
    }

    pub fn public_buyer(&self, funds: i128) -> Address {
        let who = self.contributor(funds);
        self.client.add_to_public_whitelist(&self.admin, &who);
        who
    }

    /// Everything outside the sale contract's own holdings.
    pub fn distributed(&self) -> i128 {
        TOTAL_SUPPLY - self.asset.balance(&self.client.address)
    }
}

/// Payload of the most recent `name` event published by `contract`.
pub fn last_event<T>(env: &Env, contract: &Address, name: Symbol) -> Option<T>
where
    T: TryFromVal<Env, Val>,
{
    let mut found = None;
    for (source, topics, data) in env.events().all().iter() {
        if source != *contract {
            continue;
        }
        let topic = match topics.get(0).map(|v| Symbol::try_from_val(env, &v)) {
            Some(Ok(topic)) => topic,
            _ => continue,
        };
        if topic == name {
            found = T::try_from_val(env, &data).ok();
        }
    }
    found
}
