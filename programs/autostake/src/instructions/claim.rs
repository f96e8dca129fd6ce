use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer as SplTransfer};

use crate::constants::{HOLDER_SEED, TOKEN_SEED};
use crate::error::AutostakeError;
use crate::state::{AutostakeToken, Holder};
use crate::utils::ledger;

/// Settle `wallet` and pay out everything it has accrued. Anyone may crank a
/// claim; the rewards always go to the wallet's own token account. The vault
/// and recipient accounts are only needed when there is something to pay.
pub fn claim(mut ctx: Context<Claim>, wallet: Pubkey) -> Result<()> {
    // Taken up front; the token account is the CPI signer below.
    let token_ai = ctx.accounts.token.to_account_info();
    let token_key = ctx.accounts.token.key();
    let now = Clock::get()?.unix_timestamp;

    let accounts = &mut ctx.accounts;
    let amount = ledger::settle_claim(&mut accounts.token, accounts.holder.as_deref_mut(), now)?;

    if amount > 0 {
        let reward_vault = accounts
            .reward_vault
            .as_ref()
            .ok_or(AutostakeError::InvalidTokenAccount)?;
        let recipient_token_account = accounts
            .recipient_token_account
            .as_ref()
            .ok_or(AutostakeError::InvalidTokenAccount)?;
        require!(
            reward_vault.amount >= amount,
            AutostakeError::InsufficientRewardVault
        );

        let token = &accounts.token;
        let signer_seeds: &[&[&[u8]]] = &[&[
            TOKEN_SEED,
            token.factory.as_ref(),
            token.salt.as_ref(),
            token.code_fingerprint.as_ref(),
            &[token.bump],
        ]];
        token::transfer(
            CpiContext::new_with_signer(
                accounts.token_program.to_account_info(),
                SplTransfer {
                    from: reward_vault.to_account_info(),
                    to: recipient_token_account.to_account_info(),
                    authority: token_ai,
                },
                signer_seeds,
            ),
            amount,
        )?;
    }

    let seq = accounts.token.next_seq()?;

    emit!(Claimed {
        token: token_key,
        account: wallet,
        amount,
        seq,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(wallet: Pubkey)]
pub struct Claim<'info> {
    #[account(
        mut,
        seeds = [
            TOKEN_SEED,
            token.factory.as_ref(),
            token.salt.as_ref(),
            token.code_fingerprint.as_ref()
        ],
        bump = token.bump,
    )]
    pub token: Box<Account<'info, AutostakeToken>>,

    /// Absent for a wallet that never held the token.
    #[account(
        mut,
        seeds = [HOLDER_SEED, token.key().as_ref(), wallet.as_ref()],
        bump
    )]
    pub holder: Option<Account<'info, Holder>>,

    #[account(
        mut,
        address = token.reward_vault @ AutostakeError::InvalidTokenAccount,
    )]
    pub reward_vault: Option<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = recipient_token_account.mint == token.rewards_mint @ AutostakeError::InvalidRewardMint,
        constraint = recipient_token_account.owner == wallet @ AutostakeError::InvalidTokenAccount,
    )]
    pub recipient_token_account: Option<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct Claimed {
    pub token: Pubkey,
    pub account: Pubkey,
    pub amount: u64,
    pub seq: u64,
}
