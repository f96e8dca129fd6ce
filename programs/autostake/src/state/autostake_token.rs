use anchor_lang::prelude::*;

use crate::constants::{MAX_FEE_BPS, MAX_NAME_LEN, MAX_SYMBOL_LEN, SCALE};
use crate::error::AutostakeError;
use crate::utils::{fee, rewards};

/// Owner-configured reward window. `end == 0` means no schedule was ever set.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RewardSchedule {
    pub start: i64,
    pub end: i64,
    pub rate_per_second: u64,
}

impl RewardSchedule {
    pub const SIZE: usize = 8 + 8 + 8;

    pub fn new(start: i64, end: i64, rate_per_second: u64) -> core::result::Result<Self, AutostakeError> {
        if end <= start {
            return Err(AutostakeError::InvalidSchedule);
        }
        let schedule = Self {
            start,
            end,
            rate_per_second,
        };
        schedule.total_emission()?;
        Ok(schedule)
    }

    /// Everything the window pays out, `(end - start) * rate`. A window whose
    /// total does not fit in `u64`, or whose scaled total does not fit in the
    /// accumulator, is rejected so that settlement can never overflow later.
    pub fn total_emission(&self) -> core::result::Result<u64, AutostakeError> {
        let duration = u128::try_from(i128::from(self.end) - i128::from(self.start))
            .map_err(|_| AutostakeError::InvalidSchedule)?;
        let total = duration
            .checked_mul(u128::from(self.rate_per_second))
            .ok_or(AutostakeError::InvalidSchedule)?;
        total
            .checked_mul(SCALE)
            .ok_or(AutostakeError::InvalidSchedule)?;
        u64::try_from(total).map_err(|_| AutostakeError::InvalidSchedule)
    }

    pub fn is_set(&self) -> bool {
        self.end > self.start
    }
}

/// Creation parameters of a token, validated by `AutostakeToken::initialize`.
#[derive(Clone, Debug)]
pub struct TokenInit {
    pub factory: Pubkey,
    pub owner: Pubkey,
    pub salt: [u8; 32],
    pub code_fingerprint: [u8; 32],
    pub name: String,
    pub symbol: String,
    pub fee_collector: Pubkey,
    pub fee_bps: u16,
    pub initial_supply: u64,
    pub bump: u8,
}

/// Auto-stake token PDA: `["autostake_token", factory, salt, code_fingerprint]`.
///
/// Holds the ledger totals and the reward engine (schedule and global
/// accumulator). Per-wallet balances live in `Holder` accounts.
#[account]
#[derive(Default, Debug)]
pub struct AutostakeToken {
    pub factory: Pubkey,
    /// Set once at creation; authorizes reward configuration.
    pub owner: Pubkey,
    pub salt: [u8; 32],
    pub code_fingerprint: [u8; 32],
    pub name: String,
    pub symbol: String,
    pub fee_collector: Pubkey,
    pub fee_bps: u16,
    pub total_supply: u64,
    /// `Pubkey::default()` until the owner sets it.
    pub rewards_mint: Pubkey,
    pub reward_vault: Pubkey,
    pub schedule: RewardSchedule,
    pub reward_per_token_stored: u128,
    pub last_update_time: i64,
    /// Sequence number of the next token-level event.
    pub event_seq: u64,
    pub bump: u8,
}

impl AutostakeToken {
    pub const SIZE: usize =
        32 + // factory
        32 + // owner
        32 + // salt
        32 + // code_fingerprint
        4 + MAX_NAME_LEN + // name
        4 + MAX_SYMBOL_LEN + // symbol
        32 + // fee_collector
        2 +  // fee_bps
        8 +  // total_supply
        32 + // rewards_mint
        32 + // reward_vault
        RewardSchedule::SIZE + // schedule
        16 + // reward_per_token_stored
        8 +  // last_update_time
        8 +  // event_seq
        1;   // bump

    pub fn is_initialized(&self) -> bool {
        self.factory != Pubkey::default()
    }

    /// Validate creation parameters and write them. A token already created
    /// at this address means the salt was reused.
    pub fn initialize(&mut self, init: TokenInit) -> core::result::Result<(), AutostakeError> {
        if self.is_initialized() {
            return Err(AutostakeError::DuplicateSalt);
        }
        if init.name.len() > MAX_NAME_LEN {
            return Err(AutostakeError::NameTooLong);
        }
        if init.symbol.len() > MAX_SYMBOL_LEN {
            return Err(AutostakeError::SymbolTooLong);
        }
        if init.fee_bps > MAX_FEE_BPS {
            return Err(AutostakeError::InvalidFeeRate);
        }
        if init.fee_collector == Pubkey::default() || init.factory == Pubkey::default() {
            return Err(AutostakeError::InvalidPubkey);
        }

        self.factory = init.factory;
        self.owner = init.owner;
        self.salt = init.salt;
        self.code_fingerprint = init.code_fingerprint;
        self.name = init.name;
        self.symbol = init.symbol;
        self.fee_collector = init.fee_collector;
        self.fee_bps = init.fee_bps;
        self.total_supply = init.initial_supply;
        self.rewards_mint = Pubkey::default();
        self.reward_vault = Pubkey::default();
        self.schedule = RewardSchedule::default();
        self.reward_per_token_stored = 0;
        self.last_update_time = 0;
        self.event_seq = 0;
        self.bump = init.bump;
        Ok(())
    }

    /// Reward configuration is reserved to the owner set at creation.
    pub fn ensure_owner(&self, caller: &Pubkey) -> core::result::Result<(), AutostakeError> {
        if *caller != self.owner {
            return Err(AutostakeError::Unauthorized);
        }
        Ok(())
    }

    pub fn has_rewards_token(&self) -> bool {
        self.rewards_mint != Pubkey::default()
    }

    pub fn fee_for(&self, amount: u64) -> core::result::Result<u64, AutostakeError> {
        fee::fee_amount(amount, self.fee_bps)
    }

    /// Accumulator value at `now` without writing it.
    pub fn reward_per_token_at(&self, now: i64) -> core::result::Result<u128, AutostakeError> {
        if !self.schedule.is_set() {
            return Ok(self.reward_per_token_stored);
        }
        let effective = rewards::effective_time(now, &self.schedule);
        rewards::reward_per_token(
            self.reward_per_token_stored,
            self.last_update_time,
            effective,
            self.schedule.rate_per_second,
            self.total_supply,
        )
    }

    /// Bring the global accumulator up to `now` (clamped to the schedule).
    pub fn update_reward_per_token(&mut self, now: i64) -> core::result::Result<u128, AutostakeError> {
        if !self.schedule.is_set() {
            return Ok(self.reward_per_token_stored);
        }
        let stored = self.reward_per_token_at(now)?;
        self.reward_per_token_stored = stored;
        self.last_update_time = rewards::effective_time(now, &self.schedule);
        Ok(stored)
    }

    /// Settle accrual under the current schedule, then install `schedule`.
    /// Holder entries are untouched, so earned-but-unclaimed amounts survive.
    pub fn install_schedule(
        &mut self,
        schedule: RewardSchedule,
        now: i64,
    ) -> core::result::Result<(), AutostakeError> {
        if !schedule.is_set() {
            return Err(AutostakeError::InvalidSchedule);
        }
        schedule.total_emission()?;
        self.update_reward_per_token(now)?;
        self.schedule = schedule;
        self.last_update_time = now.max(schedule.start);
        Ok(())
    }

    /// Reserve the sequence number of the next token-level event.
    pub fn next_seq(&mut self) -> core::result::Result<u64, AutostakeError> {
        let seq = self.event_seq;
        self.event_seq = seq.checked_add(1).ok_or(AutostakeError::MathOverflow)?;
        Ok(seq)
    }
}
