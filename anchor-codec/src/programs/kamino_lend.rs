//! Kamino lending (KLend) bindings.

use solana_instruction::Instruction;
use solana_pubkey::{pubkey, Pubkey};

use crate::bytes;
use crate::codec::{AccountSerde, Codec, Decoder};
use crate::discriminator::Discriminator;
use crate::error::CodecError;
use crate::filter::Filter;
use crate::instruction::{
    build_instruction, create_read, create_read_only_signer, create_writable_signer, create_write,
    RENT_SYSVAR_ID, SYSTEM_PROGRAM_ID,
};
use crate::pda::{find_program_address, ProgramDerivedAddress};

pub const ID: Pubkey = pubkey!("KLend2g3cP87fffoy8q1mQqGKjrxjC8boSyAYavgmjD");

// ===========================================================================
// Types
// ===========================================================================

/// Reserve elevation group settings, 72 bytes on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElevationGroup {
    pub max_liquidation_bonus_bps: u16,
    pub id: u8,
    pub ltv_pct: u8,
    pub liquidation_threshold_pct: u8,
    pub allow_new_loans: u8,
    pub max_reserves_as_collateral: u8,
    pub padding_0: u8,
    pub debt_reserve: Pubkey,
    pub padding_1: [u64; 4],
}

impl ElevationGroup {
    pub const BYTES: usize = 72;

    pub fn read(decoder: &mut Decoder) -> Result<Self, CodecError> {
        Ok(Self {
            max_liquidation_bonus_bps: decoder.u16()?,
            id: decoder.u8()?,
            ltv_pct: decoder.u8()?,
            liquidation_threshold_pct: decoder.u8()?,
            allow_new_loans: decoder.u8()?,
            max_reserves_as_collateral: decoder.u8()?,
            padding_0: decoder.u8()?,
            debt_reserve: decoder.pubkey()?,
            padding_1: decoder.u64_array::<4>()?,
        })
    }
}

impl Codec for ElevationGroup {
    fn encoded_len(&self) -> usize {
        Self::BYTES
    }

    fn write(&self, data: &mut [u8], offset: usize) -> usize {
        let mut i = offset;
        i += bytes::put_u16(data, i, self.max_liquidation_bonus_bps);
        i += bytes::put_u8(data, i, self.id);
        i += bytes::put_u8(data, i, self.ltv_pct);
        i += bytes::put_u8(data, i, self.liquidation_threshold_pct);
        i += bytes::put_u8(data, i, self.allow_new_loans);
        i += bytes::put_u8(data, i, self.max_reserves_as_collateral);
        i += bytes::put_u8(data, i, self.padding_0);
        i += bytes::put_pubkey(data, i, &self.debt_reserve);
        i += bytes::put_u64_array(data, i, &self.padding_1);
        i - offset
    }
}

/// Tagged union of lending market config values. The 1-byte ordinal picks
/// the variant; a byte outside 0..=8 fails the decode, there is no
/// catch-all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpdateLendingMarketConfigValue {
    Bool(bool),
    U8(u8),
    U8Array([u8; 8]),
    U16(u16),
    U64(u64),
    U128(u128),
    Pubkey(Pubkey),
    ElevationGroup(ElevationGroup),
    Name([u8; 32]),
}

impl UpdateLendingMarketConfigValue {
    pub const fn ordinal(&self) -> u8 {
        match self {
            Self::Bool(_) => 0,
            Self::U8(_) => 1,
            Self::U8Array(_) => 2,
            Self::U16(_) => 3,
            Self::U64(_) => 4,
            Self::U128(_) => 5,
            Self::Pubkey(_) => 6,
            Self::ElevationGroup(_) => 7,
            Self::Name(_) => 8,
        }
    }

    pub fn read(decoder: &mut Decoder) -> Result<Self, CodecError> {
        let ordinal = decoder.u8()?;
        Ok(match ordinal {
            0 => Self::Bool(decoder.bool()?),
            1 => Self::U8(decoder.u8()?),
            2 => Self::U8Array(decoder.array::<8>()?),
            3 => Self::U16(decoder.u16()?),
            4 => Self::U64(decoder.u64()?),
            5 => Self::U128(decoder.u128()?),
            6 => Self::Pubkey(decoder.pubkey()?),
            7 => Self::ElevationGroup(ElevationGroup::read(decoder)?),
            8 => Self::Name(decoder.array::<32>()?),
            _ => {
                return Err(CodecError::UnknownOrdinal {
                    kind: "UpdateLendingMarketConfigValue",
                    ordinal,
                })
            }
        })
    }
}

impl Codec for UpdateLendingMarketConfigValue {
    fn encoded_len(&self) -> usize {
        1 + match self {
            Self::Bool(_) | Self::U8(_) => 1,
            Self::U8Array(_) => 8,
            Self::U16(_) => 2,
            Self::U64(_) => 8,
            Self::U128(_) => 16,
            Self::Pubkey(_) => 32,
            Self::ElevationGroup(_) => ElevationGroup::BYTES,
            Self::Name(_) => 32,
        }
    }

    fn write(&self, data: &mut [u8], offset: usize) -> usize {
        let mut i = offset;
        i += bytes::put_u8(data, i, self.ordinal());
        i += match self {
            Self::Bool(v) => v.write(data, i),
            Self::U8(v) => v.write(data, i),
            Self::U8Array(v) => v.write(data, i),
            Self::U16(v) => v.write(data, i),
            Self::U64(v) => v.write(data, i),
            Self::U128(v) => v.write(data, i),
            Self::Pubkey(v) => v.write(data, i),
            Self::ElevationGroup(v) => v.write(data, i),
            Self::Name(v) => v.write(data, i),
        };
        i - offset
    }
}

// ===========================================================================
// Instructions
// ===========================================================================

pub const INIT_LENDING_MARKET_DISCRIMINATOR: Discriminator =
    Discriminator::new([34, 162, 116, 14, 101, 137, 94, 239]);

pub fn init_lending_market(
    program_id: &Pubkey,
    lending_market_owner: Pubkey,
    lending_market: Pubkey,
    lending_market_authority: Pubkey,
    quote_currency: &[u8; 32],
) -> Instruction {
    let accounts = vec![
        create_writable_signer(lending_market_owner),
        create_write(lending_market),
        create_read(lending_market_authority),
        create_read(SYSTEM_PROGRAM_ID),
        create_read(RENT_SYSVAR_ID),
    ];

    let mut data = vec![0; InitLendingMarketIxData::BYTES];
    let i = INIT_LENDING_MARKET_DISCRIMINATOR.write(&mut data, 0);
    bytes::put_array(&mut data, i, quote_currency);

    build_instruction(program_id, accounts, data)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitLendingMarketIxData {
    pub quote_currency: [u8; 32],
}

impl InitLendingMarketIxData {
    pub const BYTES: usize = Discriminator::LEN + 32;

    pub fn read(data: &[u8]) -> Result<Self, CodecError> {
        let mut decoder = Decoder::new(data);
        decoder.expect_discriminator(&INIT_LENDING_MARKET_DISCRIMINATOR, "init_lending_market")?;
        Ok(Self {
            quote_currency: decoder.array::<32>()?,
        })
    }
}

pub const UPDATE_LENDING_MARKET_DISCRIMINATOR: Discriminator =
    Discriminator::new([209, 157, 53, 210, 97, 180, 31, 45]);

/// `value` is a fixed 72-byte buffer; the meaningful prefix depends on
/// `mode` and the rest stays zero.
pub fn update_lending_market(
    program_id: &Pubkey,
    lending_market_owner: Pubkey,
    lending_market: Pubkey,
    mode: u64,
    value: &[u8; 72],
) -> Instruction {
    let accounts = vec![
        create_read_only_signer(lending_market_owner),
        create_write(lending_market),
    ];

    let mut data = vec![0; UpdateLendingMarketIxData::BYTES];
    let mut i = UPDATE_LENDING_MARKET_DISCRIMINATOR.write(&mut data, 0);
    i += bytes::put_u64(&mut data, i, mode);
    bytes::put_array(&mut data, i, value);

    build_instruction(program_id, accounts, data)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateLendingMarketIxData {
    pub mode: u64,
    pub value: [u8; 72],
}

impl UpdateLendingMarketIxData {
    pub const BYTES: usize = Discriminator::LEN + 8 + 72;

    pub fn read(data: &[u8]) -> Result<Self, CodecError> {
        let mut decoder = Decoder::new(data);
        decoder.expect_discriminator(&UPDATE_LENDING_MARKET_DISCRIMINATOR, "update_lending_market")?;
        Ok(Self {
            mode: decoder.u64()?,
            value: decoder.array::<72>()?,
        })
    }
}

pub const INIT_USER_METADATA_DISCRIMINATOR: Discriminator =
    Discriminator::new([117, 169, 176, 69, 197, 23, 15, 162]);

pub fn init_user_metadata(
    program_id: &Pubkey,
    owner: Pubkey,
    fee_payer: Pubkey,
    user_metadata: Pubkey,
    referrer_user_metadata: Pubkey,
    user_lookup_table: &Pubkey,
) -> Instruction {
    let accounts = vec![
        create_read_only_signer(owner),
        create_writable_signer(fee_payer),
        create_write(user_metadata),
        create_read(referrer_user_metadata),
        create_read(RENT_SYSVAR_ID),
        create_read(SYSTEM_PROGRAM_ID),
    ];

    let mut data = vec![0; InitUserMetadataIxData::BYTES];
    let i = INIT_USER_METADATA_DISCRIMINATOR.write(&mut data, 0);
    bytes::put_pubkey(&mut data, i, user_lookup_table);

    build_instruction(program_id, accounts, data)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitUserMetadataIxData {
    pub user_lookup_table: Pubkey,
}

impl InitUserMetadataIxData {
    pub const BYTES: usize = Discriminator::LEN + 32;

    pub fn read(data: &[u8]) -> Result<Self, CodecError> {
        let mut decoder = Decoder::new(data);
        decoder.expect_discriminator(&INIT_USER_METADATA_DISCRIMINATOR, "init_user_metadata")?;
        Ok(Self {
            user_lookup_table: decoder.pubkey()?,
        })
    }
}

// ===========================================================================
// Accounts
// ===========================================================================

/// Per-wallet metadata account. The two padding blocks are carried
/// verbatim so a decode/encode cycle reproduces the account byte for
/// byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMetadata {
    pub address: Option<Pubkey>,
    pub referrer: Pubkey,
    pub bump: u64,
    pub user_lookup_table: Pubkey,
    pub owner: Pubkey,
    pub padding_1: [u64; 51],
    pub padding_2: [u64; 64],
}

impl UserMetadata {
    pub const REFERRER_OFFSET: usize = 8;
    pub const BUMP_OFFSET: usize = 40;
    pub const USER_LOOKUP_TABLE_OFFSET: usize = 48;
    pub const OWNER_OFFSET: usize = 80;
    pub const PADDING_1_OFFSET: usize = 112;
    pub const PADDING_2_OFFSET: usize = 520;

    pub fn referrer_filter(referrer: &Pubkey) -> Filter {
        Filter::memcmp_pubkey(Self::REFERRER_OFFSET, referrer)
    }

    pub fn user_lookup_table_filter(user_lookup_table: &Pubkey) -> Filter {
        Filter::memcmp_pubkey(Self::USER_LOOKUP_TABLE_OFFSET, user_lookup_table)
    }

    pub fn owner_filter(owner: &Pubkey) -> Filter {
        Filter::memcmp_pubkey(Self::OWNER_OFFSET, owner)
    }
}

impl AccountSerde for UserMetadata {
    const KIND: &'static str = "UserMetadata";
    const DISCRIMINATOR: Discriminator =
        Discriminator::new([157, 214, 220, 235, 98, 135, 171, 28]);
    const BYTES: usize = 1032;

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
            referrer: decoder.pubkey()?,
            bump: decoder.u64()?,
            user_lookup_table: decoder.pubkey()?,
            owner: decoder.pubkey()?,
            padding_1: decoder.u64_array::<51>()?,
            padding_2: decoder.u64_array::<64>()?,
        })
    }

    fn write(&self, data: &mut [u8], offset: usize) -> usize {
        let mut i = offset;
        i += Self::DISCRIMINATOR.write(data, i);
        i += bytes::put_pubkey(data, i, &self.referrer);
        i += bytes::put_u64(data, i, self.bump);
        i += bytes::put_pubkey(data, i, &self.user_lookup_table);
        i += bytes::put_pubkey(data, i, &self.owner);
        i += bytes::put_u64_array(data, i, &self.padding_1);
        i += bytes::put_u64_array(data, i, &self.padding_2);
        i - offset
    }
}

// ===========================================================================
// PDAs
// ===========================================================================

pub fn lending_market_authority_pda(
    program_id: &Pubkey,
    lending_market: &Pubkey,
) -> ProgramDerivedAddress {
    find_program_address(&[b"lma", lending_market.as_ref()], program_id)
}

pub fn reserve_liquidity_supply_pda(
    program_id: &Pubkey,
    lending_market: &Pubkey,
    collateral_mint: &Pubkey,
) -> ProgramDerivedAddress {
    find_program_address(
        &[b"reserve_liq_supply", lending_market.as_ref(), collateral_mint.as_ref()],
        program_id,
    )
}

pub fn reserve_fee_vault_pda(
    program_id: &Pubkey,
    lending_market: &Pubkey,
    collateral_mint: &Pubkey,
) -> ProgramDerivedAddress {
    find_program_address(
        &[b"fee_receiver", lending_market.as_ref(), collateral_mint.as_ref()],
        program_id,
    )
}

pub fn reserve_collateral_mint_pda(
    program_id: &Pubkey,
    lending_market: &Pubkey,
    collateral_mint: &Pubkey,
) -> ProgramDerivedAddress {
    find_program_address(
        &[b"reserve_coll_mint", lending_market.as_ref(), collateral_mint.as_ref()],
        program_id,
    )
}

pub fn reserve_collateral_supply_pda(
    program_id: &Pubkey,
    lending_market: &Pubkey,
    collateral_mint: &Pubkey,
) -> ProgramDerivedAddress {
    find_program_address(
        &[b"reserve_coll_supply", lending_market.as_ref(), collateral_mint.as_ref()],
        program_id,
    )
}

pub fn user_metadata_pda(program_id: &Pubkey, user: &Pubkey) -> ProgramDerivedAddress {
    find_program_address(&[b"user_meta", user.as_ref()], program_id)
}
