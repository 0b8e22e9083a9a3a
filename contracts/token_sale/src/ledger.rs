use crate::errors::Error;
use soroban_sdk::{token, Address, Env};

/// The sale's view of the asset ledger: what this contract holds and how it
/// pays out of it.
pub struct AssetLedger<'a> {
    env: &'a Env,
    token: token::Client<'a>,
}

impl<'a> AssetLedger<'a> {
    pub fn new(env: &'a Env, asset: &Address) -> Self {
        Self {
            env,
            token: token::Client::new(env, asset),
        }
    }

    pub fn holdings(&self) -> i128 {
        self.token.balance(&self.env.current_contract_address())
    }

    pub fn ensure_holdings(&self, required: i128) -> Result<(), Error> {
        if self.holdings() < required {
            return Err(Error::InsufficientHoldings);
        }
        Ok(())
    }

    pub fn pay_out(&self, to: &Address, amount: i128) {
        if amount > 0 {
            self.token
                .transfer(&self.env.current_contract_address(), to, &amount);
        }
    }
}

/// Fails with `InsufficientFunds` before any transfer when the payer cannot
/// cover the contribution.
pub fn ensure_payment_funds(
    env: &Env,
    payment_asset: &Address,
    payer: &Address,
    value: i128,
) -> Result<(), Error> {
    if token::Client::new(env, payment_asset).balance(payer) < value {
        return Err(Error::InsufficientFunds);
    }
    Ok(())
}

pub fn forward_payment(
    env: &Env,
    payment_asset: &Address,
    payer: &Address,
    to: &Address,
    value: i128,
) {
    token::Client::new(env, payment_asset).transfer(payer, to, &value);
}
