use anchor_lang::prelude::*;

use crate::constants::FACTORY_SEED;
use crate::state::Factory;
use crate::utils::address;

pub fn initialize_factory(ctx: Context<InitializeFactory>) -> Result<()> {
    let factory_key = ctx.accounts.factory.key();
    let authority = ctx.accounts.authority.key();

    let factory = &mut ctx.accounts.factory;
    factory.authority = authority;
    factory.code_fingerprint = address::code_fingerprint();
    factory.token_count = 0;
    factory.bump = ctx.bumps.factory;

    emit!(FactoryInitialized {
        factory: factory_key,
        authority,
        code_fingerprint: factory.code_fingerprint,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeFactory<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + Factory::SIZE,
        seeds = [FACTORY_SEED, authority.key().as_ref()],
        bump
    )]
    pub factory: Account<'info, Factory>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct FactoryInitialized {
    pub factory: Pubkey,
    pub authority: Pubkey,
    pub code_fingerprint: [u8; 32],
}
