use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("EATGUdBxLEdzcPxb89q33nSqG8SWXYp4rDkcNBfgojy8");

#[program]
pub mod autostake {
    use super::*;

    pub fn initialize_factory(ctx: Context<InitializeFactory>) -> Result<()> {
        instructions::initialize_factory(ctx)
    }

    pub fn create_token(
        ctx: Context<CreateToken>,
        salt: [u8; 32],
        name: String,
        symbol: String,
        fee_collector: Pubkey,
        fee_bps: u16,
        initial_supply: u64,
    ) -> Result<()> {
        instructions::create_token(ctx, salt, name, symbol, fee_collector, fee_bps, initial_supply)
    }

    pub fn open_holder(ctx: Context<OpenHolder>, wallet: Pubkey) -> Result<()> {
        instructions::open_holder(ctx, wallet)
    }

    pub fn set_rewards_token(ctx: Context<SetRewardsToken>) -> Result<()> {
        instructions::set_rewards_token(ctx)
    }

    pub fn set_rewards(ctx: Context<SetRewards>, start: i64, end: i64, rate: u64) -> Result<()> {
        instructions::set_rewards(ctx, start, end, rate)
    }

    pub fn fund_rewards(ctx: Context<FundRewards>, amount: u64) -> Result<()> {
        instructions::fund_rewards(ctx, amount)
    }

    pub fn transfer(ctx: Context<TransferTokens>, recipient: Pubkey, amount: u64) -> Result<()> {
        instructions::transfer(ctx, recipient, amount)
    }

    pub fn claim(ctx: Context<Claim>, wallet: Pubkey) -> Result<()> {
        instructions::claim(ctx, wallet)
    }

    pub fn emit_rewards_quote(ctx: Context<EmitRewardsQuote>, wallet: Pubkey) -> Result<()> {
        instructions::emit_rewards_quote(ctx, wallet)
    }
}
