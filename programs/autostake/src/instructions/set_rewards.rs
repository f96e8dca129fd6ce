use anchor_lang::prelude::*;

use crate::constants::TOKEN_SEED;
use crate::state::{AutostakeToken, RewardSchedule};

pub fn set_rewards(ctx: Context<SetRewards>, start: i64, end: i64, rate: u64) -> Result<()> {
    let token_key = ctx.accounts.token.key();
    let token = &mut ctx.accounts.token;
    token.ensure_owner(&ctx.accounts.owner.key())?;

    let schedule = RewardSchedule::new(start, end, rate)?;
    let now = Clock::get()?.unix_timestamp;
    token.install_schedule(schedule, now)?;
    let seq = token.next_seq()?;

    msg!("Rewards set: {}..{} at {}/s", start, end, rate);

    emit!(RewardsSet {
        token: token_key,
        start,
        end,
        rate,
        seq,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetRewards<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [
            TOKEN_SEED,
            token.factory.as_ref(),
            token.salt.as_ref(),
            token.code_fingerprint.as_ref()
        ],
        bump = token.bump
    )]
    pub token: Box<Account<'info, AutostakeToken>>,
}

#[event]
pub struct RewardsSet {
    pub token: Pubkey,
    pub start: i64,
    pub end: i64,
    pub rate: u64,
    pub seq: u64,
}
