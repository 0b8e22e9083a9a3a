#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, contractmeta, contracttype, symbol_short, Address, Env,
};

contractmeta!(
    key = "Description",
    val = "Add-only buyer allow-list owned by a sale contract"
);

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
}

#[contracttype]
pub enum DataKey {
    Owner,
    Listed(Address),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListedEvent {
    pub account: Address,
    pub timestamp: u64,
}

#[contract]
pub struct BuyerWhitelist;

#[contractimpl]
impl BuyerWhitelist {
    /// Bind the list to its owner, authorized by the deploying `admin`.
    /// Only the owner may add accounts afterwards.
    pub fn initialize(env: Env, admin: Address, owner: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();
        env.storage().instance().set(&DataKey::Owner, &owner);
        Ok(())
    }

    /// Add `account` to the list. Adding an account twice is a no-op;
    /// the return value tells whether this call listed it.
    pub fn add(env: Env, account: Address) -> Result<bool, Error> {
        let owner = Self::owner(env.clone())?;
        owner.require_auth();

        let key = DataKey::Listed(account.clone());
        if env.storage().persistent().has(&key) {
            return Ok(false);
        }
        env.storage().persistent().set(&key, &true);

        let event = ListedEvent {
            account: account.clone(),
            timestamp: env.ledger().timestamp(),
        };
        env.events().publish((symbol_short!("listed"), account), event);
        Ok(true)
    }

    pub fn is_whitelisted(env: Env, account: Address) -> bool {
        env.storage()
            .persistent()
            .get(&DataKey::Listed(account))
            .unwrap_or(false)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(Error::NotInitialized)
    }
}
