use anchor_lang::prelude::*;

use crate::error::AutostakeError;
use crate::utils::rewards;

/// Balance and reward bookkeeping for one wallet of one token:
/// `["holder", token, wallet]`.
///
/// Created lazily on the first balance change and never closed; claiming only
/// zeroes `rewards_accrued`.
#[account]
#[derive(Default, Debug)]
pub struct Holder {
    pub token: Pubkey,
    pub wallet: Pubkey,
    pub balance: u64,
    /// Accumulator value at the last settlement (scaled by `SCALE`).
    pub reward_per_token_paid: u128,
    /// Settled but unclaimed rewards.
    pub rewards_accrued: u64,
    /// Lifetime claimed rewards.
    pub total_claimed: u64,
    pub bump: u8,
}

impl Holder {
    pub const SIZE: usize =
        32 + // token
        32 + // wallet
        8 +  // balance
        16 + // reward_per_token_paid
        8 +  // rewards_accrued
        8 +  // total_claimed
        1;   // bump

    pub fn is_bound(&self) -> bool {
        self.token != Pubkey::default()
    }

    /// Bind a freshly allocated holder to its token and wallet. No-op when
    /// already bound.
    pub fn bind(&mut self, token: Pubkey, wallet: Pubkey, bump: u8) {
        if self.is_bound() {
            return;
        }
        self.token = token;
        self.wallet = wallet;
        self.bump = bump;
    }

    /// Rewards claimable if the holder were settled against `reward_per_token`.
    pub fn earned(&self, reward_per_token: u128) -> core::result::Result<u64, AutostakeError> {
        let pending = rewards::pending_rewards(self.balance, reward_per_token, self.reward_per_token_paid)?;
        self.rewards_accrued
            .checked_add(pending)
            .ok_or(AutostakeError::MathOverflow)
    }

    /// Move accrual up to `reward_per_token` into `rewards_accrued`. Must run
    /// before every balance change.
    pub fn settle(&mut self, reward_per_token: u128) -> core::result::Result<(), AutostakeError> {
        let accrued = self.earned(reward_per_token)?;
        self.rewards_accrued = accrued;
        self.reward_per_token_paid = reward_per_token;
        Ok(())
    }

    /// Zero the accrued rewards and return them. Call `settle` first.
    pub fn take_rewards(&mut self) -> core::result::Result<u64, AutostakeError> {
        let amount = self.rewards_accrued;
        let total_claimed = self
            .total_claimed
            .checked_add(amount)
            .ok_or(AutostakeError::MathOverflow)?;
        self.rewards_accrued = 0;
        self.total_claimed = total_claimed;
        Ok(amount)
    }

    pub fn credit(&mut self, amount: u64) -> core::result::Result<(), AutostakeError> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(AutostakeError::MathOverflow)?;
        Ok(())
    }

    pub fn debit(&mut self, amount: u64) -> core::result::Result<(), AutostakeError> {
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(AutostakeError::InsufficientBalance)?;
        Ok(())
    }
}
