//! Shared fixtures for the integration suites.
//!
//! Keeps the suites free of repeated boilerplate: deterministic test
//! keys and an independent sha256 derivation of Anchor discriminators
//! so the hardcoded constants in the library are cross-checked against
//! a second implementation.

use sha2::{Digest, Sha256};
use solana_instruction::Instruction;
use solana_pubkey::Pubkey;

/// Deterministic key for positional assertions. Distinct fill bytes give
/// distinct keys, and failures print recognizably.
pub fn test_key(fill: u8) -> Pubkey {
    Pubkey::new_from_array([fill; 32])
}

/// Anchor instruction discriminator derived from scratch.
pub fn global_discriminator(name: &str) -> [u8; 8] {
    hash_prefix("global", name)
}

/// Anchor account discriminator derived from scratch.
pub fn account_discriminator(name: &str) -> [u8; 8] {
    hash_prefix("account", name)
}

fn hash_prefix(namespace: &str, name: &str) -> [u8; 8] {
    let mut hasher = Sha256::new();
    hasher.update(namespace.as_bytes());
    hasher.update(b":");
    hasher.update(name.as_bytes());
    let digest = hasher.finalize();
    let mut out = [0u8; 8];
    out.copy_from_slice(&digest[..8]);
    out
}

/// (signer, writable) flags per account slot, in positional order.
pub fn account_roles(ix: &Instruction) -> Vec<(bool, bool)> {
    ix.accounts
        .iter()
        .map(|meta| (meta.is_signer, meta.is_writable))
        .collect()
}

/// Keys per account slot, in positional order.
pub fn account_keys(ix: &Instruction) -> Vec<Pubkey> {
    ix.accounts.iter().map(|meta| meta.pubkey).collect()
}
