use soroban_sdk::{contractclient, Address, Env};

/// Surface of the vesting vaults the sale deposits into.
#[allow(dead_code)]
#[contractclient(name = "VaultClient")]
pub trait Vault {
    fn deposit(env: Env, beneficiary: Address, amount: i128);
    fn get_total_deposit(env: Env) -> i128;
    fn get_vault_limit(env: Env) -> i128;
}

/// Surface of the buyer whitelists the sale owns.
#[allow(dead_code)]
#[contractclient(name = "WhitelistClient")]
pub trait Whitelist {
    fn add(env: Env, account: Address) -> bool;
    fn is_whitelisted(env: Env, account: Address) -> bool;
}
