#![no_std]

mod contract;
mod errors;
mod events;
pub mod schedule;
mod storage;
mod types;

pub use contract::{VestingVault, VestingVaultClient};
pub use errors::Error;
pub use events::{DepositEvent, ReleaseEvent, VaultInitializedEvent};
pub use types::{Deposit, Milestone, VaultConfig};
