#![no_std]

mod contract;
mod errors;
mod events;
mod interfaces;
mod ledger;
pub mod phase;
mod storage;
mod types;

pub use contract::{TokenSaleContract, TokenSaleContractClient};
pub use errors::Error;
pub use events::{AllocationEvent, PurchaseEvent, SweepEvent};
pub use types::{Allocation, Phase, Rate, RoundTerms, SaleSchedule, SaleSetup};
