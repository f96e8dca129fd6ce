use anchor_lang::prelude::*;

/// Custom error codes for the autostake program.
#[error_code]
pub enum AutostakeError {
    #[msg("Salt already used by this factory")]
    DuplicateSalt,

    #[msg("Unauthorized: token owner signature required")]
    Unauthorized,

    #[msg("Invalid reward schedule (end must be after start)")]
    InvalidSchedule,

    #[msg("Insufficient balance")]
    InsufficientBalance,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Fee rate exceeds 10000 bps")]
    InvalidFeeRate,

    #[msg("Token name too long")]
    NameTooLong,

    #[msg("Token symbol too long")]
    SymbolTooLong,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Malformed address prediction input")]
    MalformedAddressInput,

    #[msg("Deployed address does not match predicted address")]
    AddressMismatch,

    #[msg("Sender and recipient must differ")]
    SelfTransfer,

    #[msg("Fee collector account missing or unexpected")]
    InvalidFeeCollector,

    #[msg("Rewards token not set")]
    RewardsTokenNotSet,

    #[msg("Invalid rewards token mint")]
    InvalidRewardMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Insufficient reward vault balance")]
    InsufficientRewardVault,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,
}
