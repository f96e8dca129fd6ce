use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer as SplTransfer};

use crate::constants::TOKEN_SEED;
use crate::error::AutostakeError;
use crate::state::AutostakeToken;

pub fn fund_rewards(ctx: Context<FundRewards>, amount: u64) -> Result<()> {
    require!(amount > 0, AutostakeError::InvalidAmount);

    let token = &ctx.accounts.token;
    require!(token.has_rewards_token(), AutostakeError::RewardsTokenNotSet);
    require_keys_eq!(ctx.accounts.reward_vault.key(), token.reward_vault, AutostakeError::InvalidTokenAccount);
    require_keys_eq!(
        ctx.accounts.funder_token_account.mint,
        token.rewards_mint,
        AutostakeError::InvalidRewardMint
    );
    require_keys_eq!(
        ctx.accounts.funder_token_account.owner,
        ctx.accounts.funder.key(),
        AutostakeError::InvalidTokenAccount
    );

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            SplTransfer {
                from: ctx.accounts.funder_token_account.to_account_info(),
                to: ctx.accounts.reward_vault.to_account_info(),
                authority: ctx.accounts.funder.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.reward_vault.reload()?;

    emit!(RewardsFunded {
        token: ctx.accounts.token.key(),
        funder: ctx.accounts.funder.key(),
        amount,
        vault_balance: ctx.accounts.reward_vault.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct FundRewards<'info> {
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
        mut,
        constraint = reward_vault.mint == token.rewards_mint @ AutostakeError::InvalidRewardMint,
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub funder_token_account: Account<'info, TokenAccount>,

    pub funder: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct RewardsFunded {
    pub token: Pubkey,
    pub funder: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
