//! Program-wide constants: PDA seeds, fixed-point scale and deployment limits.

/// Seed of the factory PDA: `["factory", authority]`.
pub const FACTORY_SEED: &[u8] = b"factory";

/// Seed of a token PDA: `["autostake_token", factory, salt, code_fingerprint]`.
pub const TOKEN_SEED: &[u8] = b"autostake_token";

/// Seed of a holder PDA: `["holder", token, wallet]`.
pub const HOLDER_SEED: &[u8] = b"holder";

/// Seed of a creation record PDA: `["creation", factory, index_le]`.
pub const CREATION_SEED: &[u8] = b"creation";

/// Seed of the reward vault PDA: `["reward_vault", token, reward_mint]`.
pub const REWARD_VAULT_SEED: &[u8] = b"reward_vault";

/// Fixed-point scale of the reward-per-token accumulator.
pub const SCALE: u128 = 1_000_000_000_000_000_000;

/// Basis points denominator for the transfer fee.
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Upper bound on `fee_bps` (a fee of the whole amount).
pub const MAX_FEE_BPS: u16 = 10_000;

/// Max token name length in bytes.
pub const MAX_NAME_LEN: usize = 32;

/// Max token symbol length in bytes.
pub const MAX_SYMBOL_LEN: usize = 10;

/// Domain separator hashed into the creation-code fingerprint.
pub const CODE_FINGERPRINT_DOMAIN: &[u8] = b"autostake-token";

/// Bumped whenever the `AutostakeToken` account layout changes.
pub const TOKEN_LAYOUT_VERSION: u16 = 1;
