//! Eight-byte Anchor discriminators.
//!
//! Anchor prefixes every account's data and every instruction's payload
//! with an 8-byte tag derived from the item's name. Tags are matched by
//! exact byte equality, never by prefix or fuzzy match.

use sha2::{Digest, Sha256};

use crate::error::CodecError;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Discriminator([u8; Discriminator::LEN]);

impl Discriminator {
    pub const LEN: usize = 8;

    pub const fn new(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    /// `sha256("global:<name>")[..8]`, the tag of the Anchor instruction
    /// handler `name` (snake case, as it appears in the program source).
    pub fn anchor_instruction(name: &str) -> Self {
        Self::derive("global", name)
    }

    /// `sha256("account:<Name>")[..8]`, the tag of the Anchor account
    /// struct `Name` (the type name, not a field name).
    pub fn anchor_account(name: &str) -> Self {
        Self::derive("account", name)
    }

    fn derive(namespace: &str, name: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(format!("{namespace}:{name}"));
        let hash = hasher.finalize();
        let mut bytes = [0u8; Self::LEN];
        bytes.copy_from_slice(&hash[..Self::LEN]);
        Self(bytes)
    }

    pub fn parse(data: &[u8], offset: usize) -> Result<Self, CodecError> {
        match data.get(offset..offset + Self::LEN) {
            Some(window) => {
                let mut bytes = [0u8; Self::LEN];
                bytes.copy_from_slice(window);
                Ok(Self(bytes))
            }
            None => Err(CodecError::Truncated {
                offset,
                needed: Self::LEN,
                have: data.len().saturating_sub(offset),
            }),
        }
    }

    /// Parses the tag at `offset` and fails unless it equals `self`.
    /// Returns the offset of the first byte after the tag.
    pub fn expect(&self, data: &[u8], offset: usize, kind: &'static str) -> Result<usize, CodecError> {
        let found = Self::parse(data, offset)?;
        if found == *self {
            Ok(offset + Self::LEN)
        } else {
            Err(CodecError::DiscriminatorMismatch {
                kind,
                expected: *self,
                found,
            })
        }
    }

    pub fn write(&self, data: &mut [u8], offset: usize) -> usize {
        data[offset..offset + Self::LEN].copy_from_slice(&self.0);
        Self::LEN
    }

    pub const fn to_bytes(self) -> [u8; Self::LEN] {
        self.0
    }
}

impl AsRef<[u8]> for Discriminator {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
