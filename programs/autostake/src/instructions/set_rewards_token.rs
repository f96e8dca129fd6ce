use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{REWARD_VAULT_SEED, TOKEN_SEED};
use crate::state::AutostakeToken;

pub fn set_rewards_token(ctx: Context<SetRewardsToken>) -> Result<()> {
    let token_key = ctx.accounts.token.key();
    let asset = ctx.accounts.rewards_mint.key();
    let vault = ctx.accounts.reward_vault.key();

    let token = &mut ctx.accounts.token;
    token.ensure_owner(&ctx.accounts.owner.key())?;

    token.rewards_mint = asset;
    token.reward_vault = vault;
    let seq = token.next_seq()?;

    emit!(RewardsTokenSet {
        token: token_key,
        asset,
        vault,
        seq,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetRewardsToken<'info> {
    #[account(mut)]
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

    pub rewards_mint: Account<'info, Mint>,

    #[account(
        init_if_needed,
        payer = owner,
        token::mint = rewards_mint,
        token::authority = token,
        seeds = [REWARD_VAULT_SEED, token.key().as_ref(), rewards_mint.key().as_ref()],
        bump
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct RewardsTokenSet {
    pub token: Pubkey,
    pub asset: Pubkey,
    pub vault: Pubkey,
    pub seq: u64,
}
