//! GLAM protocol bindings.
//!
//! Tokenized vault/fund protocol. Builders take the invoked program id
//! explicitly so the same code serves mainnet and test deployments; the
//! mainnet id is [`ID`].

use solana_instruction::Instruction;
use solana_pubkey::{pubkey, Pubkey};

use crate::bytes;
use crate::codec::Decoder;
use crate::discriminator::Discriminator;
use crate::error::CodecError;
use crate::instruction::{
    build_instruction, create_read, create_writable_signer, create_write, key_or_program,
    SYSTEM_PROGRAM_ID,
};
use crate::pda::{find_program_address, ProgramDerivedAddress};

pub const ID: Pubkey = pubkey!("GLAMbTqav9N9witRjswJ8enwp9vv5G8bsSJ2kPJ4rcyc");

// ===========================================================================
// Instructions
// ===========================================================================

pub const CLOSE_STATE_DISCRIMINATOR: Discriminator =
    Discriminator::new([25, 1, 184, 101, 200, 245, 210, 246]);

/// Closes a GLAM state account. The metadata slot is optional; an absent
/// key is filled with the invoked program id.
pub fn close_state(
    program_id: &Pubkey,
    glam_state: Pubkey,
    glam_vault: Pubkey,
    glam_signer: Pubkey,
    metadata: Option<Pubkey>,
) -> Instruction {
    let accounts = vec![
        create_write(glam_state),
        create_write(glam_vault),
        create_writable_signer(glam_signer),
        create_write(key_or_program(metadata, program_id)),
        create_read(SYSTEM_PROGRAM_ID),
    ];

    let mut data = vec![0; Discriminator::LEN];
    CLOSE_STATE_DISCRIMINATOR.write(&mut data, 0);

    build_instruction(program_id, accounts, data)
}

pub const ENABLE_DISABLE_PROTOCOLS_DISCRIMINATOR: Discriminator =
    Discriminator::new([222, 198, 164, 163, 194, 161, 11, 171]);

/// Flips protocol bits for one integration program on a GLAM state.
pub fn enable_disable_protocols(
    program_id: &Pubkey,
    glam_state: Pubkey,
    glam_signer: Pubkey,
    integration_program: &Pubkey,
    protocols_bitmask: u16,
    set_enabled: bool,
) -> Instruction {
    let accounts = vec![create_write(glam_state), create_writable_signer(glam_signer)];

    let mut data = vec![0; EnableDisableProtocolsIxData::BYTES];
    let mut i = ENABLE_DISABLE_PROTOCOLS_DISCRIMINATOR.write(&mut data, 0);
    i += bytes::put_pubkey(&mut data, i, integration_program);
    i += bytes::put_u16(&mut data, i, protocols_bitmask);
    bytes::put_bool(&mut data, i, set_enabled);

    build_instruction(program_id, accounts, data)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnableDisableProtocolsIxData {
    pub integration_program: Pubkey,
    pub protocols_bitmask: u16,
    pub set_enabled: bool,
}

impl EnableDisableProtocolsIxData {
    pub const BYTES: usize = Discriminator::LEN + 32 + 2 + 1;

    pub fn read(data: &[u8]) -> Result<Self, CodecError> {
        let mut decoder = Decoder::new(data);
        decoder.expect_discriminator(
            &ENABLE_DISABLE_PROTOCOLS_DISCRIMINATOR,
            "enable_disable_protocols",
        )?;
        Ok(Self {
            integration_program: decoder.pubkey()?,
            protocols_bitmask: decoder.u16()?,
            set_enabled: decoder.bool()?,
        })
    }
}

// ===========================================================================
// PDAs
// ===========================================================================

pub fn glam_config_pda(program_id: &Pubkey) -> ProgramDerivedAddress {
    find_program_address(&[b"global-config"], program_id)
}

pub fn glam_escrow_pda(program_id: &Pubkey, glam_state: &Pubkey) -> ProgramDerivedAddress {
    find_program_address(&[b"escrow", glam_state.as_ref()], program_id)
}

pub fn glam_vault_pda(program_id: &Pubkey, glam_state: &Pubkey) -> ProgramDerivedAddress {
    find_program_address(&[b"vault", glam_state.as_ref()], program_id)
}

/// The third seed is the creation key recorded in the state model.
pub fn glam_state_pda(
    program_id: &Pubkey,
    glam_signer: &Pubkey,
    state_created: &[u8],
) -> ProgramDerivedAddress {
    find_program_address(&[b"state", glam_signer.as_ref(), state_created], program_id)
}

pub fn metadata_pda(program_id: &Pubkey, glam_state: &Pubkey) -> ProgramDerivedAddress {
    find_program_address(&[b"metadata", glam_state.as_ref()], program_id)
}

// ===========================================================================
// Errors
// ===========================================================================

/// GLAM protocol error codes, grouped by the on-chain module that raises
/// them: access control (48xxx), state (49xxx), vault operations (50xxx),
/// pricing (51xxx) and mint policy (52xxx).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[repr(u32)]
pub enum GlamError {
    #[error("Signer is not authorized")]
    UnauthorizedSigner = 48000,
    #[error("Integration program is not authorized")]
    UnauthorizedIntegrationProgram = 48001,
    #[error("Integration is not enabled")]
    IntegrationNotEnabled = 48002,
    #[error("Protocol is not enabled")]
    ProtocolNotEnabled = 48003,
    #[error("GLAM state is disabled")]
    GlamStateDisabled = 48004,
    #[error("Protocol policy violation")]
    ProtocolPolicyViolation = 48005,
    #[error("Emergency update denied")]
    EmergencyUpdateDenied = 48006,
    #[error("Timelock still active")]
    TimelockStillActive = 48007,
    #[error("Pending changes cannot be applied due to unfulfilled requests")]
    CannotApplyChanges = 48008,
    #[error("Asset is not allowed to borrow")]
    AssetNotBorrowable = 48009,
    #[error("Account is owned by an unexpected program")]
    UnexpectedProgramOwner = 48010,
    #[error("Invalid authority")]
    InvalidAuthority = 48011,
    #[error("Invalid account type")]
    InvalidAccountType = 49000,
    #[error("Invalid name")]
    InvalidName = 49001,
    #[error("Symbol too long: max 32 chars")]
    InvalidSymbol = 49002,
    #[error("Uri too long: max 128 chars")]
    InvalidUri = 49003,
    #[error("Too many assets: max 100")]
    InvalidAssetsLen = 49004,
    #[error("Glam mint not found")]
    InvalidIxArgs = 49005,
    #[error("Glam state cannot be closed, all mints must be closed first")]
    CannotCloseState = 49006,
    #[error("Invalid mint params")]
    InvalidMintParams = 49007,
    #[error("Invalid accounts: the transaction is malformed")]
    InvalidRemainingAccounts = 49008,
    #[error("Invalid vault ata")]
    InvalidVaultTokenAccount = 49009,
    #[error("Glam mint supply not zero")]
    NonZeroSupply = 49010,
    #[error("An account required by the instruction is missing")]
    MissingAccount = 49011,
    #[error("Invalid timestamp")]
    InvalidTimestamp = 49012,
    #[error("Engine field not found")]
    EngineFieldNotFound = 49013,
    #[error("Invalid base asset")]
    InvalidBaseAsset = 49014,
    #[error("Invalid protocol bitflag")]
    InvalidProtocolBitflag = 49015,
    #[error("Withdraw denied. Only vaults allow withdraws (funds and mints don't)")]
    WithdrawDenied = 50000,
    #[error("Asset cannot be swapped")]
    InvalidAssetForSwap = 50001,
    #[error("Unsupported swap instruction")]
    UnsupportedSwapIx = 50002,
    #[error("Max slippage exceeded")]
    SlippageLimitExceeded = 50003,
    #[error("Invalid platform fee")]
    InvalidPlatformFeeForSwap = 50004,
    #[error("Invalid token account")]
    InvalidTokenAccount = 50005,
    #[error("Invalid vote side")]
    InvalidVoteSide = 50006,
    #[error("Multiple stake accounts disallowed")]
    MultipleStakeAccountsDisallowed = 50007,
    #[error("Invalid asset price")]
    InvalidAssetPrice = 51000,
    #[error("Subscription not allowed: invalid stable coin price")]
    InvalidStableCoinPriceForSubscribe = 51001,
    #[error("Invalid oracle for asset price")]
    InvalidPricingOracle = 51100,
    #[error("Pricing error")]
    PricingError = 51101,
    #[error("Price is too old")]
    PriceTooOld = 51102,
    #[error("Not all external vault accounts are priced")]
    ExternalPositionsNotPriced = 51103,
    #[error("Not all vault tokens are priced")]
    VaultTokensNotPriced = 51104,
    #[error("No priced assets found")]
    PriceDivergenceTooLarge = 51105,
    #[error("AUM must be positive")]
    PositiveAumRequired = 51106,
    #[error("Math error")]
    MathError = 51107,
    #[error("Type casting error")]
    TypeCastingError = 51108,
    #[error("Base asset must have 6 decimals.")]
    BaseAssetNotSupported = 51109,
    #[error("Unsupported spot market for perp quotes")]
    InvalidQuoteSpotMarket = 51110,
    #[error("Unknown external vault account")]
    UnknownExternalVaultAsset = 51111,
    #[error("Invalid price denom")]
    InvalidPriceDenom = 51112,
    #[error("Invalid account: discriminator mismatch")]
    UnexpectedDiscriminator = 51113,
    #[error("Policy violation: transfers disabled")]
    TransfersDisabled = 52000,
    #[error("Policy account is mandatory")]
    InvalidPolicyAccount = 52001,
    #[error("Policy violation: amount too big")]
    AmountTooBig = 52002,
    #[error("Policy violation: lock-up has not expired")]
    LockUp = 52003,
}

impl GlamError {
    pub fn from_code(code: u32) -> Result<Self, CodecError> {
        Ok(match code {
            48000 => Self::UnauthorizedSigner,
            48001 => Self::UnauthorizedIntegrationProgram,
            48002 => Self::IntegrationNotEnabled,
            48003 => Self::ProtocolNotEnabled,
            48004 => Self::GlamStateDisabled,
            48005 => Self::ProtocolPolicyViolation,
            48006 => Self::EmergencyUpdateDenied,
            48007 => Self::TimelockStillActive,
            48008 => Self::CannotApplyChanges,
            48009 => Self::AssetNotBorrowable,
            48010 => Self::UnexpectedProgramOwner,
            48011 => Self::InvalidAuthority,
            49000 => Self::InvalidAccountType,
            49001 => Self::InvalidName,
            49002 => Self::InvalidSymbol,
            49003 => Self::InvalidUri,
            49004 => Self::InvalidAssetsLen,
            49005 => Self::InvalidIxArgs,
            49006 => Self::CannotCloseState,
            49007 => Self::InvalidMintParams,
            49008 => Self::InvalidRemainingAccounts,
            49009 => Self::InvalidVaultTokenAccount,
            49010 => Self::NonZeroSupply,
            49011 => Self::MissingAccount,
            49012 => Self::InvalidTimestamp,
            49013 => Self::EngineFieldNotFound,
            49014 => Self::InvalidBaseAsset,
            49015 => Self::InvalidProtocolBitflag,
            50000 => Self::WithdrawDenied,
            50001 => Self::InvalidAssetForSwap,
            50002 => Self::UnsupportedSwapIx,
            50003 => Self::SlippageLimitExceeded,
            50004 => Self::InvalidPlatformFeeForSwap,
            50005 => Self::InvalidTokenAccount,
            50006 => Self::InvalidVoteSide,
            50007 => Self::MultipleStakeAccountsDisallowed,
            51000 => Self::InvalidAssetPrice,
            51001 => Self::InvalidStableCoinPriceForSubscribe,
            51100 => Self::InvalidPricingOracle,
            51101 => Self::PricingError,
            51102 => Self::PriceTooOld,
            51103 => Self::ExternalPositionsNotPriced,
            51104 => Self::VaultTokensNotPriced,
            51105 => Self::PriceDivergenceTooLarge,
            51106 => Self::PositiveAumRequired,
            51107 => Self::MathError,
            51108 => Self::TypeCastingError,
            51109 => Self::BaseAssetNotSupported,
            51110 => Self::InvalidQuoteSpotMarket,
            51111 => Self::UnknownExternalVaultAsset,
            51112 => Self::InvalidPriceDenom,
            51113 => Self::UnexpectedDiscriminator,
            52000 => Self::TransfersDisabled,
            52001 => Self::InvalidPolicyAccount,
            52002 => Self::AmountTooBig,
            52003 => Self::LockUp,
            _ => {
                return Err(CodecError::UnknownErrorCode {
                    program: "glam_protocol",
                    code,
                })
            }
        })
    }

    pub const fn code(self) -> u32 {
        self as u32
    }
}
