//! Deterministic address derivation.
//!
//! A token lives at `PDA["autostake_token", factory, salt, code_fingerprint]`
//! under the program id. The same derivation is used by `create_token` to place
//! the token and by clients to predict it before submitting the creation.

use anchor_lang::prelude::*;
use anchor_lang::Discriminator;

use crate::constants::{
    CODE_FINGERPRINT_DOMAIN, CREATION_SEED, FACTORY_SEED, HOLDER_SEED, REWARD_VAULT_SEED,
    TOKEN_LAYOUT_VERSION, TOKEN_SEED,
};
use crate::error::AutostakeError;
use crate::state::AutostakeToken;

/// Fingerprint of the token code: blake3 over the domain, the account
/// discriminator and the layout version.
pub fn code_fingerprint() -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    hasher.update(CODE_FINGERPRINT_DOMAIN);
    hasher.update(AutostakeToken::DISCRIMINATOR);
    hasher.update(&TOKEN_LAYOUT_VERSION.to_le_bytes());
    *hasher.finalize().as_bytes()
}

/// Predicted token address and bump under an explicit program id.
pub fn predict_token_address_for_program(
    factory: &Pubkey,
    salt: &[u8; 32],
    code_fingerprint: &[u8; 32],
    program_id: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            TOKEN_SEED,
            factory.as_ref(),
            salt.as_ref(),
            code_fingerprint.as_ref(),
        ],
        program_id,
    )
}

/// Predicted token address and bump under this program.
pub fn predict_token_address(
    factory: &Pubkey,
    salt: &[u8; 32],
    code_fingerprint: &[u8; 32],
) -> (Pubkey, u8) {
    predict_token_address_for_program(factory, salt, code_fingerprint, &crate::ID)
}

/// Slice-based prediction for callers holding raw bytes. Every input must be
/// exactly 32 bytes.
pub fn predict_from_parts(
    factory: &[u8],
    salt: &[u8],
    code_fingerprint: &[u8],
) -> core::result::Result<(Pubkey, u8), AutostakeError> {
    let factory = Pubkey::try_from(factory).map_err(|_| AutostakeError::MalformedAddressInput)?;
    let salt: [u8; 32] = salt
        .try_into()
        .map_err(|_| AutostakeError::MalformedAddressInput)?;
    let code_fingerprint: [u8; 32] = code_fingerprint
        .try_into()
        .map_err(|_| AutostakeError::MalformedAddressInput)?;
    Ok(predict_token_address(&factory, &salt, &code_fingerprint))
}

pub fn factory_address(authority: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[FACTORY_SEED, authority.as_ref()], &crate::ID)
}

pub fn holder_address(token: &Pubkey, wallet: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[HOLDER_SEED, token.as_ref(), wallet.as_ref()], &crate::ID)
}

pub fn reward_vault_address(token: &Pubkey, rewards_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[REWARD_VAULT_SEED, token.as_ref(), rewards_mint.as_ref()],
        &crate::ID,
    )
}

pub fn creation_record_address(factory: &Pubkey, index: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[CREATION_SEED, factory.as_ref(), index.to_le_bytes().as_ref()],
        &crate::ID,
    )
}

/// Creation record addresses for indices `from..to`, in creation order.
pub fn creation_record_range(factory: &Pubkey, from: u64, to: u64) -> Vec<Pubkey> {
    (from..to)
        .map(|index| creation_record_address(factory, index).0)
        .collect()
}
