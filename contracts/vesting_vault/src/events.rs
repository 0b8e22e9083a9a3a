use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct VaultInitializedEvent {
    pub owner: Address,
    pub admin: Address,
    pub asset: Address,
    pub limit: i128,
    pub milestones: u32,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct DepositEvent {
    pub beneficiary: Address,
    pub amount: i128,
    pub total_deposited: i128,
    pub vault_total: i128,
    pub timestamp: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ReleaseEvent {
    pub beneficiary: Address,
    pub released_by: Address,
    pub amount: i128,
    pub total_released: i128,
    pub unlocked_percent: u32,
    pub timestamp: u64,
}

pub fn emit_initialized(env: &Env, event: VaultInitializedEvent) {
    env.events().publish((symbol_short!("init"),), event);
}

pub fn emit_deposit(env: &Env, event: DepositEvent) {
    env.events()
        .publish((symbol_short!("deposit"), event.beneficiary.clone()), event);
}

pub fn emit_release(env: &Env, event: ReleaseEvent) {
    env.events()
        .publish((symbol_short!("release"), event.beneficiary.clone()), event);
}
