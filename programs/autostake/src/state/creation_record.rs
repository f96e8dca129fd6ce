use anchor_lang::prelude::*;

/// Append-only creation log entry: `["creation", factory, index_le]`.
///
/// Records are written once by `create_token` and never touched again, so the
/// range `[from, to)` of creations can be read back by deriving each index.
#[account]
#[derive(Default, Debug)]
pub struct CreationRecord {
    pub factory: Pubkey,
    pub index: u64,
    pub owner: Pubkey,
    pub deployed_address: Pubkey,
    pub predicted_address: Pubkey,
    pub salt: [u8; 32],
    pub bump: u8,
}

impl CreationRecord {
    pub const SIZE: usize =
        32 + // factory
        8 +  // index
        32 + // owner
        32 + // deployed_address
        32 + // predicted_address
        32 + // salt
        1;   // bump
}
