use crate::constants::{BPS_DENOMINATOR, MAX_FEE_BPS};
use crate::error::AutostakeError;

/// Fee skimmed from a transfer of `amount` at `fee_bps`, rounded down.
pub fn fee_amount(amount: u64, fee_bps: u16) -> Result<u64, AutostakeError> {
    if fee_bps > MAX_FEE_BPS {
        return Err(AutostakeError::InvalidFeeRate);
    }
    let fee = (amount as u128)
        .checked_mul(fee_bps as u128)
        .ok_or(AutostakeError::MathOverflow)?
        / (BPS_DENOMINATOR as u128);
    u64::try_from(fee).map_err(|_| AutostakeError::MathOverflow)
}
