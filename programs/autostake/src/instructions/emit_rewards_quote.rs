use anchor_lang::prelude::*;

use crate::constants::{HOLDER_SEED, TOKEN_SEED};
use crate::state::{AutostakeToken, Holder};

/// Read-only view of what `wallet` could claim right now.
pub fn emit_rewards_quote(ctx: Context<EmitRewardsQuote>, wallet: Pubkey) -> Result<()> {
    let token = &ctx.accounts.token;
    let holder = &ctx.accounts.holder;
    let now = Clock::get()?.unix_timestamp;

    let reward_per_token = token.reward_per_token_at(now)?;
    let earned = holder.earned(reward_per_token)?;

    emit!(RewardsQuote {
        token: token.key(),
        account: wallet,
        balance: holder.balance,
        earned,
        total_claimed: holder.total_claimed,
        reward_per_token,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(wallet: Pubkey)]
pub struct EmitRewardsQuote<'info> {
    #[account(
        seeds = [
            TOKEN_SEED,
            token.factory.as_ref(),
            token.salt.as_ref(),
            token.code_fingerprint.as_ref()
        ],
        bump = token.bump
    )]
    pub token: Box<Account<'info, AutostakeToken>>,

    #[account(
        seeds = [HOLDER_SEED, token.key().as_ref(), wallet.as_ref()],
        bump = holder.bump
    )]
    pub holder: Account<'info, Holder>,
}

#[event]
pub struct RewardsQuote {
    pub token: Pubkey,
    pub account: Pubkey,
    pub balance: u64,
    pub earned: u64,
    pub total_claimed: u64,
    pub reward_per_token: u128,
}
