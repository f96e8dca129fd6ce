use anchor_lang::prelude::*;

use crate::constants::{HOLDER_SEED, TOKEN_SEED};
use crate::error::AutostakeError;
use crate::state::{AutostakeToken, Holder};
use crate::utils::ledger::{self, FeeSink};

pub fn transfer(mut ctx: Context<TransferTokens>, recipient: Pubkey, amount: u64) -> Result<()> {
    let sender = ctx.accounts.sender.key();
    require_keys_neq!(sender, recipient, AutostakeError::SelfTransfer);

    let token_key = ctx.accounts.token.key();
    let fee_collector = ctx.accounts.token.fee_collector;
    let recipient_bump = ctx.bumps.recipient_holder;
    let now = Clock::get()?.unix_timestamp;

    let accounts = &mut ctx.accounts;
    accounts.recipient_holder.bind(token_key, recipient, recipient_bump);

    // A wallet that never held the token has a zero balance.
    let mut unopened = Holder::default();
    let sender_holder = match accounts.sender_holder.as_deref_mut() {
        Some(holder) => holder,
        None => &mut unopened,
    };

    // A party that is itself the collector absorbs the fee directly.
    let fee_sink = if fee_collector == sender || fee_collector == recipient {
        require!(
            accounts.fee_collector_holder.is_none(),
            AutostakeError::InvalidFeeCollector
        );
        if fee_collector == sender {
            FeeSink::Sender
        } else {
            FeeSink::Recipient
        }
    } else {
        let collector = accounts
            .fee_collector_holder
            .as_deref_mut()
            .ok_or(AutostakeError::InvalidFeeCollector)?;
        require!(collector.is_bound(), AutostakeError::InvalidFeeCollector);
        FeeSink::Collector(collector)
    };

    let outcome = ledger::apply_transfer(
        &mut accounts.token,
        sender_holder,
        &mut accounts.recipient_holder,
        fee_sink,
        amount,
        now,
    )?;
    let seq = accounts.token.next_seq()?;

    emit!(Transfer {
        token: token_key,
        from: sender,
        to: recipient,
        amount,
        fee: outcome.fee,
        seq,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(recipient: Pubkey)]
pub struct TransferTokens<'info> {
    #[account(mut)]
    pub sender: Signer<'info>,

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

    /// Absent for a wallet that never held the token.
    #[account(
        mut,
        seeds = [HOLDER_SEED, token.key().as_ref(), sender.key().as_ref()],
        bump
    )]
    pub sender_holder: Option<Account<'info, Holder>>,

    #[account(
        init_if_needed,
        payer = sender,
        space = 8 + Holder::SIZE,
        seeds = [HOLDER_SEED, token.key().as_ref(), recipient.as_ref()],
        bump
    )]
    pub recipient_holder: Account<'info, Holder>,

    /// Required unless the sender or recipient is the fee collector.
    #[account(
        mut,
        seeds = [HOLDER_SEED, token.key().as_ref(), token.fee_collector.as_ref()],
        bump
    )]
    pub fee_collector_holder: Option<Account<'info, Holder>>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct Transfer {
    pub token: Pubkey,
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
    pub fee: u64,
    pub seq: u64,
}
