//! Pure sale arithmetic: phase lookup by time and rate conversion.

use crate::errors::Error;
use crate::types::{Phase, Rate, SaleSchedule};

pub const FULL_PERCENT: u32 = 100;

/// Phase active at `at`. Each start is inclusive; round 3 ends strictly
/// before the closing time.
pub fn phase_at(at: u64, schedule: &SaleSchedule) -> Phase {
    if at < schedule.private_start {
        Phase::PreSale
    } else if at < schedule.round1_start {
        Phase::PrivateSale
    } else if at < schedule.round2_start {
        Phase::PublicRound1
    } else if at < schedule.round3_start {
        Phase::PublicRound2
    } else if at < schedule.closing_time {
        Phase::PublicRound3
    } else {
        Phase::Closed
    }
}

/// Checks `floor <= private_start < round1 < round2 < round3 < closing`.
pub fn validate_schedule(floor: u64, schedule: &SaleSchedule) -> Result<(), Error> {
    let ordered = floor <= schedule.private_start
        && schedule.private_start < schedule.round1_start
        && schedule.round1_start < schedule.round2_start
        && schedule.round2_start < schedule.round3_start
        && schedule.round3_start < schedule.closing_time;
    if ordered {
        Ok(())
    } else {
        Err(Error::InvalidOrdering)
    }
}

pub fn validate_rate(rate: &Rate) -> Result<(), Error> {
    if rate.units <= 0 || rate.per_value <= 0 {
        return Err(Error::InvalidRate);
    }
    Ok(())
}

/// `floor(value * units / per_value)`, multiply first.
pub fn units_for(value: i128, rate: &Rate) -> Result<i128, Error> {
    validate_rate(rate)?;
    value
        .checked_mul(rate.units)
        .and_then(|scaled| scaled.checked_div(rate.per_value))
        .ok_or(Error::Overflow)
}

/// Splits a private-sale purchase into `(upfront, vaulted)`.
pub fn split_private(units: i128, upfront_percent: u32) -> Result<(i128, i128), Error> {
    if upfront_percent > FULL_PERCENT {
        return Err(Error::InvalidConfig);
    }
    let upfront = units
        .checked_mul(upfront_percent as i128)
        .ok_or(Error::Overflow)?
        / FULL_PERCENT as i128;
    Ok((upfront, units - upfront))
}
