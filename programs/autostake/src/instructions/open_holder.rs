use anchor_lang::prelude::*;

use crate::constants::{HOLDER_SEED, TOKEN_SEED};
use crate::state::{AutostakeToken, Holder};

/// Allocate the holder account of `wallet` ahead of its first balance change.
/// Idempotent; needed for a fee collector before it can be paid.
pub fn open_holder(ctx: Context<OpenHolder>, wallet: Pubkey) -> Result<()> {
    let token_key = ctx.accounts.token.key();
    let holder = &mut ctx.accounts.holder;
    if !holder.is_bound() {
        holder.bind(token_key, wallet, ctx.bumps.holder);
        msg!("Holder opened for {}", wallet);
    }
    Ok(())
}

#[derive(Accounts)]
#[instruction(wallet: Pubkey)]
pub struct OpenHolder<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

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
        init_if_needed,
        payer = payer,
        space = 8 + Holder::SIZE,
        seeds = [HOLDER_SEED, token.key().as_ref(), wallet.as_ref()],
        bump
    )]
    pub holder: Account<'info, Holder>,

    pub system_program: Program<'info, System>,
}
