//! MetaDAO autocrat (futarchy) bindings.

use solana_instruction::Instruction;
use solana_pubkey::{pubkey, Pubkey};

use crate::bytes;
use crate::codec::{AccountSerde, Decoder};
use crate::discriminator::Discriminator;
use crate::error::CodecError;
use crate::filter::Filter;
use crate::instruction::{
    build_instruction, create_read, create_write, TOKEN_PROGRAM_ID,
};

pub const ID: Pubkey = pubkey!("autoQP9RmUNkzzKRXsMkWicDVZ3h29vvyMDcAYjCxxg");

// ===========================================================================
// Instructions
// ===========================================================================

pub const FINALIZE_PROPOSAL_DISCRIMINATOR: Discriminator =
    Discriminator::new([23, 68, 51, 167, 109, 173, 187, 164]);

#[allow(clippy::too_many_arguments)]
pub fn finalize_proposal(
    program_id: &Pubkey,
    proposal: Pubkey,
    pass_amm: Pubkey,
    fail_amm: Pubkey,
    dao: Pubkey,
    question: Pubkey,
    treasury: Pubkey,
    pass_lp_user_account: Pubkey,
    fail_lp_user_account: Pubkey,
    pass_lp_vault_account: Pubkey,
    fail_lp_vault_account: Pubkey,
    vault_program: Pubkey,
    vault_event_authority: Pubkey,
    event_authority: Pubkey,
    program: Pubkey,
) -> Instruction {
    let accounts = vec![
        create_write(proposal),
        create_read(pass_amm),
        create_read(fail_amm),
        create_read(dao),
        create_write(question),
        create_read(treasury),
        create_write(pass_lp_user_account),
        create_write(fail_lp_user_account),
        create_write(pass_lp_vault_account),
        create_write(fail_lp_vault_account),
        create_read(TOKEN_PROGRAM_ID),
        create_read(vault_program),
        create_read(vault_event_authority),
        create_read(event_authority),
        create_read(program),
    ];

    let mut data = vec![0; Discriminator::LEN];
    FINALIZE_PROPOSAL_DISCRIMINATOR.write(&mut data, 0);

    build_instruction(program_id, accounts, data)
}

pub const EXECUTE_PROPOSAL_DISCRIMINATOR: Discriminator =
    Discriminator::new([186, 60, 116, 133, 108, 128, 111, 28]);

pub fn execute_proposal(
    program_id: &Pubkey,
    proposal: Pubkey,
    dao: Pubkey,
    event_authority: Pubkey,
    program: Pubkey,
) -> Instruction {
    let accounts = vec![
        create_write(proposal),
        create_read(dao),
        create_read(event_authority),
        create_read(program),
    ];

    let mut data = vec![0; Discriminator::LEN];
    EXECUTE_PROPOSAL_DISCRIMINATOR.write(&mut data, 0);

    build_instruction(program_id, accounts, data)
}

// ===========================================================================
// Accounts
// ===========================================================================

/// DAO configuration. The TWAP fields are u128 fixed-point AMM
/// observations; see the program's docs for how they gate proposal
/// finalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dao {
    pub address: Option<Pubkey>,
    pub treasury_pda_bump: u8,
    pub treasury: Pubkey,
    pub token_mint: Pubkey,
    pub usdc_mint: Pubkey,
    pub proposal_count: u32,
    pub pass_threshold_bps: u16,
    pub slots_per_proposal: u64,
    pub twap_initial_observation: u128,
    pub twap_max_observation_change_per_update: u128,
    pub min_quote_futarchic_liquidity: u64,
    pub min_base_futarchic_liquidity: u64,
    pub seq_num: u64,
}

impl Dao {
    pub const TREASURY_PDA_BUMP_OFFSET: usize = 8;
    pub const TREASURY_OFFSET: usize = 9;
    pub const TOKEN_MINT_OFFSET: usize = 41;
    pub const USDC_MINT_OFFSET: usize = 73;
    pub const PROPOSAL_COUNT_OFFSET: usize = 105;
    pub const PASS_THRESHOLD_BPS_OFFSET: usize = 109;
    pub const SLOTS_PER_PROPOSAL_OFFSET: usize = 111;
    pub const TWAP_INITIAL_OBSERVATION_OFFSET: usize = 119;
    pub const TWAP_MAX_OBSERVATION_CHANGE_PER_UPDATE_OFFSET: usize = 135;
    pub const MIN_QUOTE_FUTARCHIC_LIQUIDITY_OFFSET: usize = 151;
    pub const MIN_BASE_FUTARCHIC_LIQUIDITY_OFFSET: usize = 159;
    pub const SEQ_NUM_OFFSET: usize = 167;

    pub fn treasury_filter(treasury: &Pubkey) -> Filter {
        Filter::memcmp_pubkey(Self::TREASURY_OFFSET, treasury)
    }

    pub fn token_mint_filter(token_mint: &Pubkey) -> Filter {
        Filter::memcmp_pubkey(Self::TOKEN_MINT_OFFSET, token_mint)
    }

    pub fn usdc_mint_filter(usdc_mint: &Pubkey) -> Filter {
        Filter::memcmp_pubkey(Self::USDC_MINT_OFFSET, usdc_mint)
    }

    pub fn proposal_count_filter(proposal_count: u32) -> Filter {
        Filter::memcmp(Self::PROPOSAL_COUNT_OFFSET, &proposal_count.to_le_bytes())
    }

    pub fn pass_threshold_bps_filter(pass_threshold_bps: u16) -> Filter {
        Filter::memcmp(
            Self::PASS_THRESHOLD_BPS_OFFSET,
            &pass_threshold_bps.to_le_bytes(),
        )
    }

    pub fn seq_num_filter(seq_num: u64) -> Filter {
        Filter::memcmp(Self::SEQ_NUM_OFFSET, &seq_num.to_le_bytes())
    }
}

impl AccountSerde for Dao {
    const KIND: &'static str = "Dao";
    const DISCRIMINATOR: Discriminator = Discriminator::new([163, 9, 47, 31, 52, 85, 197, 49]);
    const BYTES: usize = 175;

    fn read(address: Option<Pubkey>, data: &[u8]) -> Result<Self, CodecError> {
        if data.len() < Self::BYTES {
            return Err(CodecError::Truncated {
                offset: 0,
                needed: Self::BYTES,
                have: data.len(),
            });
        }
        let mut decoder = Decoder::new(data);
        decoder.expect_discriminator(&Self::DISCRIMINATOR, Self::KIND)?;
        Ok(Self {
            address,
            treasury_pda_bump: decoder.u8()?,
            treasury: decoder.pubkey()?,
            token_mint: decoder.pubkey()?,
            usdc_mint: decoder.pubkey()?,
            proposal_count: decoder.u32()?,
            pass_threshold_bps: decoder.u16()?,
            slots_per_proposal: decoder.u64()?,
            twap_initial_observation: decoder.u128()?,
            twap_max_observation_change_per_update: decoder.u128()?,
            min_quote_futarchic_liquidity: decoder.u64()?,
            min_base_futarchic_liquidity: decoder.u64()?,
            seq_num: decoder.u64()?,
        })
    }

    fn write(&self, data: &mut [u8], offset: usize) -> usize {
        let mut i = offset;
        i += Self::DISCRIMINATOR.write(data, i);
        i += bytes::put_u8(data, i, self.treasury_pda_bump);
        i += bytes::put_pubkey(data, i, &self.treasury);
        i += bytes::put_pubkey(data, i, &self.token_mint);
        i += bytes::put_pubkey(data, i, &self.usdc_mint);
        i += bytes::put_u32(data, i, self.proposal_count);
        i += bytes::put_u16(data, i, self.pass_threshold_bps);
        i += bytes::put_u64(data, i, self.slots_per_proposal);
        i += bytes::put_u128(data, i, self.twap_initial_observation);
        i += bytes::put_u128(data, i, self.twap_max_observation_change_per_update);
        i += bytes::put_u64(data, i, self.min_quote_futarchic_liquidity);
        i += bytes::put_u64(data, i, self.min_base_futarchic_liquidity);
        i += bytes::put_u64(data, i, self.seq_num);
        i - offset
    }
}

// ===========================================================================
// Errors
// ===========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[repr(u32)]
pub enum AutocratError {
    #[error("Amms must have been created within 5 minutes (counted in slots) of proposal initialization")]
    AmmTooOld = 6000,
    #[error("An amm has an `initial_observation` that doesn't match the `dao`'s config")]
    InvalidInitialObservation = 6001,
    #[error("An amm has a `max_observation_change_per_update` that doesn't match the `dao`'s config")]
    InvalidMaxObservationChange = 6002,
    #[error("One of the vaults has an invalid `settlement_authority`")]
    InvalidSettlementAuthority = 6003,
    #[error("Proposal is too young to be executed or rejected")]
    ProposalTooYoung = 6004,
    #[error("Markets too young for proposal to be finalized. TWAP might need to be cranked")]
    MarketsTooYoung = 6005,
    #[error("This proposal has already been finalized")]
    ProposalAlreadyFinalized = 6006,
    #[error("A conditional vault has an invalid nonce. A nonce should encode the proposal number")]
    InvalidVaultNonce = 6007,
    #[error("This proposal can't be executed because it isn't in the passed state")]
    ProposalNotPassed = 6008,
    #[error("The proposer has fewer pass or fail LP tokens than they requested to lock")]
    InsufficientLpTokenBalance = 6009,
    #[error("The LP tokens passed in have less liquidity than the DAO's `min_quote_futarchic_liquidity` or `min_base_futachic_liquidity`")]
    InsufficientLpTokenLock = 6010,
}

impl AutocratError {
    pub fn from_code(code: u32) -> Result<Self, CodecError> {
        Ok(match code {
            6000 => Self::AmmTooOld,
            6001 => Self::InvalidInitialObservation,
            6002 => Self::InvalidMaxObservationChange,
            6003 => Self::InvalidSettlementAuthority,
            6004 => Self::ProposalTooYoung,
            6005 => Self::MarketsTooYoung,
            6006 => Self::ProposalAlreadyFinalized,
            6007 => Self::InvalidVaultNonce,
            6008 => Self::ProposalNotPassed,
            6009 => Self::InsufficientLpTokenBalance,
            6010 => Self::InsufficientLpTokenLock,
            _ => {
                return Err(CodecError::UnknownErrorCode {
                    program: "autocrat",
                    code,
                })
            }
        })
    }

    pub const fn code(self) -> u32 {
        self as u32
    }
}
