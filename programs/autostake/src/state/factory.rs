use anchor_lang::prelude::*;

use crate::error::AutostakeError;

/// Token factory PDA, one per authority: `["factory", authority]`.
#[account]
#[derive(Default, Debug)]
pub struct Factory {
    /// Wallet that initialized the factory.
    pub authority: Pubkey,
    /// Fingerprint of the token code placed by this factory.
    pub code_fingerprint: [u8; 32],
    /// Number of tokens created; also the index of the next creation record.
    pub token_count: u64,
    pub bump: u8,
}

impl Factory {
    pub const SIZE: usize =
        32 + // authority
        32 + // code_fingerprint
        8 +  // token_count
        1;   // bump

    /// Reserve the next creation index.
    pub fn next_creation_index(&mut self) -> core::result::Result<u64, AutostakeError> {
        let index = self.token_count;
        self.token_count = index.checked_add(1).ok_or(AutostakeError::MathOverflow)?;
        Ok(index)
    }
}
