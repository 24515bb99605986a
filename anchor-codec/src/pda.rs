//! Program derived addresses.

use solana_pubkey::Pubkey;

/// A derived address together with the bump that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramDerivedAddress {
    pub address: Pubkey,
    pub bump: u8,
}

/// Finds the first off-curve address for `seeds`, searching bumps
/// downward from 255. Deterministic for a given seed list and program.
pub fn find_program_address(seeds: &[&[u8]], program_id: &Pubkey) -> ProgramDerivedAddress {
    let (address, bump) = Pubkey::find_program_address(seeds, program_id);
    ProgramDerivedAddress { address, bump }
}
