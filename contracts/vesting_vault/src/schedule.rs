//! Milestone schedule math.
//!
//! Everything here is a pure function of its inputs so it can be driven with
//! any clock value. Percent math multiplies before dividing and truncates
//! toward zero; the terminal 100 % milestone bypasses the division so the
//! last release always equals the exact remainder.

use crate::errors::Error;
use crate::types::{Deposit, Milestone};

pub const FULL_PERCENT: u32 = 100;

/// Check that milestones are non-empty, strictly increasing in both time and
/// percent, stay within `1..=100`, and end at 100.
pub fn validate<I>(milestones: I) -> Result<(), Error>
where
    I: IntoIterator<Item = Milestone>,
{
    let mut last: Option<Milestone> = None;
    for milestone in milestones {
        if milestone.percent == 0 || milestone.percent > FULL_PERCENT {
            return Err(Error::InvalidSchedule);
        }
        if let Some(prev) = last {
            if milestone.time <= prev.time || milestone.percent <= prev.percent {
                return Err(Error::InvalidSchedule);
            }
        }
        last = Some(milestone);
    }

    match last {
        Some(final_step) if final_step.percent == FULL_PERCENT => Ok(()),
        _ => Err(Error::InvalidSchedule),
    }
}

/// Cumulative percent unlocked at `at`: the percent of the greatest milestone
/// whose time is `<= at`, or 0 before the first one.
pub fn unlocked_percent_at<I>(milestones: I, at: u64) -> u32
where
    I: IntoIterator<Item = Milestone>,
{
    let mut percent = 0;
    for milestone in milestones {
        if milestone.time > at {
            break;
        }
        percent = milestone.percent;
    }
    percent
}

pub fn vested_amount(total_deposited: i128, percent: u32) -> Result<i128, Error> {
    if percent >= FULL_PERCENT {
        return Ok(total_deposited);
    }
    total_deposited
        .checked_mul(percent as i128)
        .map(|scaled| scaled / FULL_PERCENT as i128)
        .ok_or(Error::Overflow)
}

/// Amount a deposit may release at `percent` unlocked, never negative.
pub fn releasable_amount(deposit: &Deposit, percent: u32) -> Result<i128, Error> {
    let vested = vested_amount(deposit.total_deposited, percent)?;
    Ok(vested.saturating_sub(deposit.total_released).max(0))
}
