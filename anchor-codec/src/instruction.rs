//! Account meta roles and instruction assembly.
//!
//! Builders hold account lists positional and immutable: no reordering,
//! no deduplication, no key validation. What the caller passes is what
//! lands on the wire.

use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::{pubkey, Pubkey};

pub const SYSTEM_PROGRAM_ID: Pubkey = Pubkey::new_from_array([0; 32]);
pub const TOKEN_PROGRAM_ID: Pubkey = pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");
pub const RENT_SYSVAR_ID: Pubkey = pubkey!("SysvarRent111111111111111111111111111111111");

pub fn create_read(key: Pubkey) -> AccountMeta {
    AccountMeta::new_readonly(key, false)
}

pub fn create_write(key: Pubkey) -> AccountMeta {
    AccountMeta::new(key, false)
}

pub fn create_read_only_signer(key: Pubkey) -> AccountMeta {
    AccountMeta::new_readonly(key, true)
}

pub fn create_writable_signer(key: Pubkey) -> AccountMeta {
    AccountMeta::new(key, true)
}

/// Optional account slots stay positional: an absent key is replaced by
/// the invoked program's id, which on-chain code reads as "not provided".
/// The substitution is never reversed on the client side.
pub fn key_or_program(key: Option<Pubkey>, program_id: &Pubkey) -> Pubkey {
    key.unwrap_or(*program_id)
}

pub fn build_instruction(
    program_id: &Pubkey,
    accounts: Vec<AccountMeta>,
    data: Vec<u8>,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts,
        data,
    }
}
