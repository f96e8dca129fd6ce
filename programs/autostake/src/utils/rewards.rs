//! Reward-per-token accrual math.
//!
//! The global accumulator grows by `elapsed * rate * SCALE / total_supply`
//! over the clamped schedule window; a holder earns
//! `balance * (accumulator - snapshot) / SCALE`. Every division rounds down so
//! the vault is never asked for more than `rate * elapsed`.

use crate::constants::SCALE;
use crate::error::AutostakeError;
use crate::state::RewardSchedule;

/// `now` clamped into `[schedule.start, schedule.end]`.
pub fn effective_time(now: i64, schedule: &RewardSchedule) -> i64 {
    now.max(schedule.start).min(schedule.end)
}

/// Accumulator after accruing from `last_update` to `effective`.
pub fn reward_per_token(
    stored: u128,
    last_update: i64,
    effective: i64,
    rate_per_second: u64,
    total_supply: u64,
) -> Result<u128, AutostakeError> {
    if total_supply == 0 || effective <= last_update {
        return Ok(stored);
    }
    let elapsed = (effective as i128 - last_update as i128) as u128;
    let increment = elapsed
        .checked_mul(rate_per_second as u128)
        .ok_or(AutostakeError::MathOverflow)?
        .checked_mul(SCALE)
        .ok_or(AutostakeError::MathOverflow)?
        / (total_supply as u128);
    stored
        .checked_add(increment)
        .ok_or(AutostakeError::MathOverflow)
}

/// Rewards earned by `balance` since the holder's `paid` snapshot.
pub fn pending_rewards(balance: u64, reward_per_token: u128, paid: u128) -> Result<u64, AutostakeError> {
    let delta = reward_per_token
        .checked_sub(paid)
        .ok_or(AutostakeError::MathOverflow)?;
    let pending = (balance as u128)
        .checked_mul(delta)
        .ok_or(AutostakeError::MathOverflow)?
        / SCALE;
    u64::try_from(pending).map_err(|_| AutostakeError::MathOverflow)
}
