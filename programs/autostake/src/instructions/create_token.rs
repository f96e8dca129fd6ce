use anchor_lang::prelude::*;

use crate::constants::{CREATION_SEED, FACTORY_SEED, HOLDER_SEED, TOKEN_SEED};
use crate::error::AutostakeError;
use crate::state::{AutostakeToken, CreationRecord, Factory, Holder, TokenInit};
use crate::utils::address;

pub fn create_token(
    ctx: Context<CreateToken>,
    salt: [u8; 32],
    name: String,
    symbol: String,
    fee_collector: Pubkey,
    fee_bps: u16,
    initial_supply: u64,
) -> Result<()> {
    let factory_key = ctx.accounts.factory.key();
    let token_key = ctx.accounts.token.key();
    let caller = ctx.accounts.caller.key();
    let code_fingerprint = ctx.accounts.factory.code_fingerprint;

    // The account was placed by the seeds constraint; it must be exactly the
    // address any client would predict.
    let (predicted_address, bump) =
        address::predict_token_address_for_program(&factory_key, &salt, &code_fingerprint, ctx.program_id);
    require_keys_eq!(token_key, predicted_address, AutostakeError::AddressMismatch);

    ctx.accounts.token.initialize(TokenInit {
        factory: factory_key,
        owner: caller,
        salt,
        code_fingerprint,
        name,
        symbol,
        fee_collector,
        fee_bps,
        initial_supply,
        bump,
    })?;

    let owner_holder = &mut ctx.accounts.owner_holder;
    owner_holder.bind(token_key, caller, ctx.bumps.owner_holder);
    owner_holder.credit(initial_supply)?;

    let index = ctx.accounts.factory.next_creation_index()?;
    let record = &mut ctx.accounts.creation_record;
    record.factory = factory_key;
    record.index = index;
    record.owner = caller;
    record.deployed_address = token_key;
    record.predicted_address = predicted_address;
    record.salt = salt;
    record.bump = ctx.bumps.creation_record;

    msg!("Autostake token #{} created at {}", index, token_key);

    emit!(TokenCreated {
        factory: factory_key,
        index,
        owner: caller,
        deployed_address: token_key,
        predicted_address,
        salt,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(salt: [u8; 32])]
pub struct CreateToken<'info> {
    #[account(mut)]
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [FACTORY_SEED, factory.authority.as_ref()],
        bump = factory.bump
    )]
    pub factory: Account<'info, Factory>,

    // init_if_needed so a reused salt reaches the handler and fails with
    // DuplicateSalt instead of a system-program error.
    #[account(
        init_if_needed,
        payer = caller,
        space = 8 + AutostakeToken::SIZE,
        seeds = [
            TOKEN_SEED,
            factory.key().as_ref(),
            salt.as_ref(),
            factory.code_fingerprint.as_ref()
        ],
        bump
    )]
    pub token: Box<Account<'info, AutostakeToken>>,

    #[account(
        init_if_needed,
        payer = caller,
        space = 8 + Holder::SIZE,
        seeds = [HOLDER_SEED, token.key().as_ref(), caller.key().as_ref()],
        bump
    )]
    pub owner_holder: Account<'info, Holder>,

    #[account(
        init,
        payer = caller,
        space = 8 + CreationRecord::SIZE,
        seeds = [
            CREATION_SEED,
            factory.key().as_ref(),
            factory.token_count.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub creation_record: Account<'info, CreationRecord>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct TokenCreated {
    pub factory: Pubkey,
    pub index: u64,
    pub owner: Pubkey,
    pub deployed_address: Pubkey,
    pub predicted_address: Pubkey,
    pub salt: [u8; 32],
}
