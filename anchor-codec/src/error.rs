//! Decode failure taxonomy.
//!
//! Every failure is surfaced on first detection; nothing is retried,
//! defaulted or silently clamped.

use thiserror::Error;

use crate::discriminator::Discriminator;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The buffer ends before the field being read.
    #[error("buffer too short: need {needed} bytes at offset {offset}, have {have}")]
    Truncated {
        offset: usize,
        needed: usize,
        have: usize,
    },

    /// The leading 8-byte tag does not match the expected account or
    /// instruction kind.
    #[error("discriminator mismatch for [{kind}]: expected {expected:?}, found {found:?}")]
    DiscriminatorMismatch {
        kind: &'static str,
        expected: Discriminator,
        found: Discriminator,
    },

    /// A tagged-union byte that maps to no known variant.
    #[error("unexpected ordinal [{ordinal}] for enum [{kind}]")]
    UnknownOrdinal { kind: &'static str, ordinal: u8 },

    /// A program error code outside the program's published table.
    #[error("unexpected error code [{code}] for program [{program}]")]
    UnknownErrorCode { program: &'static str, code: u32 },

    /// A borsh string field whose bytes are not valid UTF-8.
    #[error("invalid utf-8 in string field at offset {offset}")]
    InvalidUtf8 { offset: usize },
}
