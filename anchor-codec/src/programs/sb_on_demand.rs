//! Switchboard on-demand bindings.

use solana_instruction::Instruction;
use solana_pubkey::{pubkey, Pubkey};

use crate::codec::{len_option, write_option, Codec, Decoder};
use crate::discriminator::Discriminator;
use crate::error::CodecError;
use crate::instruction::{build_instruction, create_read_only_signer, create_write};

pub const ID: Pubkey = pubkey!("SBondMDrcV3K4kxZR1HNVT7osZxAHVHgYXL5Ze1oMUv");

// ===========================================================================
// Types
// ===========================================================================

/// Partial reconfiguration of a pull feed. Every field is optional;
/// absent fields keep their on-chain value. Field order is the wire
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PullFeedSetConfigsParams {
    pub feed_hash: Option<[u8; 32]>,
    pub authority: Option<Pubkey>,
    pub max_variance: Option<u64>,
    pub min_responses: Option<u32>,
    pub name: Option<[u8; 32]>,
    pub ipfs_hash: Option<[u8; 32]>,
    pub min_sample_size: Option<u8>,
    pub max_staleness: Option<u32>,
}

impl PullFeedSetConfigsParams {
    pub fn read(decoder: &mut Decoder) -> Result<Self, CodecError> {
        Ok(Self {
            feed_hash: decoder.option_array::<32>()?,
            authority: decoder.option_pubkey()?,
            max_variance: decoder.option_u64()?,
            min_responses: decoder.option_u32()?,
            name: decoder.option_array::<32>()?,
            ipfs_hash: decoder.option_array::<32>()?,
            min_sample_size: decoder.option_u8()?,
            max_staleness: decoder.option_u32()?,
        })
    }
}

impl Codec for PullFeedSetConfigsParams {
    fn encoded_len(&self) -> usize {
        len_option(&self.feed_hash)
            + len_option(&self.authority)
            + len_option(&self.max_variance)
            + len_option(&self.min_responses)
            + len_option(&self.name)
            + len_option(&self.ipfs_hash)
            + len_option(&self.min_sample_size)
            + len_option(&self.max_staleness)
    }

    fn write(&self, data: &mut [u8], offset: usize) -> usize {
        let mut i = offset;
        i += write_option(&self.feed_hash, data, i);
        i += write_option(&self.authority, data, i);
        i += write_option(&self.max_variance, data, i);
        i += write_option(&self.min_responses, data, i);
        i += write_option(&self.name, data, i);
        i += write_option(&self.ipfs_hash, data, i);
        i += write_option(&self.min_sample_size, data, i);
        i += write_option(&self.max_staleness, data, i);
        i - offset
    }
}

// ===========================================================================
// Instructions
// ===========================================================================

pub const PULL_FEED_SET_CONFIGS_DISCRIMINATOR: Discriminator =
    Discriminator::new([217, 45, 11, 246, 64, 26, 82, 168]);

pub fn pull_feed_set_configs(
    program_id: &Pubkey,
    pull_feed: Pubkey,
    authority: Pubkey,
    params: &PullFeedSetConfigsParams,
) -> Instruction {
    let accounts = vec![create_write(pull_feed), create_read_only_signer(authority)];

    let mut data = vec![0; Discriminator::LEN + params.encoded_len()];
    let i = PULL_FEED_SET_CONFIGS_DISCRIMINATOR.write(&mut data, 0);
    params.write(&mut data, i);

    build_instruction(program_id, accounts, data)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PullFeedSetConfigsIxData {
    pub params: PullFeedSetConfigsParams,
}

impl PullFeedSetConfigsIxData {
    pub fn read(data: &[u8]) -> Result<Self, CodecError> {
        let mut decoder = Decoder::new(data);
        decoder.expect_discriminator(&PULL_FEED_SET_CONFIGS_DISCRIMINATOR, "pull_feed_set_configs")?;
        Ok(Self {
            params: PullFeedSetConfigsParams::read(&mut decoder)?,
        })
    }
}
