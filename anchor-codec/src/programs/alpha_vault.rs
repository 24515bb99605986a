//! Meteora alpha vault bindings.
//!
//! Token launch vaults with optional Merkle-proof gated (permissioned)
//! participation.

use solana_instruction::Instruction;
use solana_pubkey::{pubkey, Pubkey};

use crate::bytes;
use crate::codec::{
    len_array_vector, write_array_vector, AccountSerde, Codec, Decoder,
};
use crate::discriminator::Discriminator;
use crate::error::CodecError;
use crate::filter::Filter;
use crate::instruction::{
    build_instruction, create_read, create_read_only_signer, create_writable_signer, create_write,
    key_or_program, SYSTEM_PROGRAM_ID,
};

pub const ID: Pubkey = pubkey!("vaU6kP7iNEGkbmPkLmZfGwiGxd4Mob24QQCie5R9kd2");

// ===========================================================================
// Types
// ===========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateMerkleRootConfigParams {
    pub root: [u8; 32],
    pub version: u64,
}

impl CreateMerkleRootConfigParams {
    pub const BYTES: usize = 32 + 8;

    pub fn read(decoder: &mut Decoder) -> Result<Self, CodecError> {
        Ok(Self {
            root: decoder.array::<32>()?,
            version: decoder.u64()?,
        })
    }
}

impl Codec for CreateMerkleRootConfigParams {
    fn encoded_len(&self) -> usize {
        Self::BYTES
    }

    fn write(&self, data: &mut [u8], offset: usize) -> usize {
        let mut i = offset;
        i += bytes::put_array(data, i, &self.root);
        i += bytes::put_u64(data, i, self.version);
        i - offset
    }
}

// ===========================================================================
// Instructions
// ===========================================================================

pub const CLAIM_TOKEN_DISCRIMINATOR: Discriminator =
    Discriminator::new([116, 206, 27, 191, 166, 19, 0, 73]);

#[allow(clippy::too_many_arguments)]
pub fn claim_token(
    program_id: &Pubkey,
    vault: Pubkey,
    escrow: Pubkey,
    token_out_vault: Pubkey,
    destination_token: Pubkey,
    token_mint: Pubkey,
    token_program: Pubkey,
    owner: Pubkey,
    event_authority: Pubkey,
    program: Pubkey,
) -> Instruction {
    let accounts = vec![
        create_write(vault),
        create_write(escrow),
        create_write(token_out_vault),
        create_write(destination_token),
        create_read(token_mint),
        create_read(token_program),
        create_read_only_signer(owner),
        create_read(event_authority),
        create_read(program),
    ];

    let mut data = vec![0; Discriminator::LEN];
    CLAIM_TOKEN_DISCRIMINATOR.write(&mut data, 0);

    build_instruction(program_id, accounts, data)
}

pub const CLOSE_ESCROW_DISCRIMINATOR: Discriminator =
    Discriminator::new([139, 171, 94, 146, 191, 91, 144, 50]);

pub fn close_escrow(
    program_id: &Pubkey,
    vault: Pubkey,
    escrow: Pubkey,
    owner: Pubkey,
    rent_receiver: Pubkey,
    event_authority: Pubkey,
    program: Pubkey,
) -> Instruction {
    let accounts = vec![
        create_write(vault),
        create_write(escrow),
        create_read_only_signer(owner),
        create_write(rent_receiver),
        create_read(event_authority),
        create_read(program),
    ];

    let mut data = vec![0; Discriminator::LEN];
    CLOSE_ESCROW_DISCRIMINATOR.write(&mut data, 0);

    build_instruction(program_id, accounts, data)
}

pub const CREATE_MERKLE_ROOT_CONFIG_DISCRIMINATOR: Discriminator =
    Discriminator::new([55, 243, 253, 240, 78, 186, 232, 166]);

pub fn create_merkle_root_config(
    program_id: &Pubkey,
    vault: Pubkey,
    merkle_root_config: Pubkey,
    admin: Pubkey,
    event_authority: Pubkey,
    program: Pubkey,
    params: &CreateMerkleRootConfigParams,
) -> Instruction {
    let accounts = vec![
        create_read(vault),
        create_write(merkle_root_config),
        create_writable_signer(admin),
        create_read(SYSTEM_PROGRAM_ID),
        create_read(event_authority),
        create_read(program),
    ];

    let mut data = vec![0; Discriminator::LEN + params.encoded_len()];
    let i = CREATE_MERKLE_ROOT_CONFIG_DISCRIMINATOR.write(&mut data, 0);
    params.write(&mut data, i);

    build_instruction(program_id, accounts, data)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateMerkleRootConfigIxData {
    pub params: CreateMerkleRootConfigParams,
}

impl CreateMerkleRootConfigIxData {
    pub const BYTES: usize = Discriminator::LEN + CreateMerkleRootConfigParams::BYTES;

    pub fn read(data: &[u8]) -> Result<Self, CodecError> {
        let mut decoder = Decoder::new(data);
        decoder.expect_discriminator(
            &CREATE_MERKLE_ROOT_CONFIG_DISCRIMINATOR,
            "create_merkle_root_config",
        )?;
        Ok(Self {
            params: CreateMerkleRootConfigParams::read(&mut decoder)?,
        })
    }
}

pub const CREATE_PERMISSIONED_ESCROW_DISCRIMINATOR: Discriminator =
    Discriminator::new([60, 166, 36, 85, 96, 137, 132, 184]);

/// The escrow fee receiver slot is optional; an absent key is filled with
/// the invoked program id. `proof` is the Merkle path of 32-byte nodes
/// for the owner's whitelist entry.
#[allow(clippy::too_many_arguments)]
pub fn create_permissioned_escrow(
    program_id: &Pubkey,
    vault: Pubkey,
    pool: Pubkey,
    escrow: Pubkey,
    owner: Pubkey,
    merkle_root_config: Pubkey,
    payer: Pubkey,
    escrow_fee_receiver: Option<Pubkey>,
    event_authority: Pubkey,
    program: Pubkey,
    max_cap: u64,
    proof: &[[u8; 32]],
) -> Instruction {
    let accounts = vec![
        create_write(vault),
        create_read(pool),
        create_write(escrow),
        create_read(owner),
        create_read(merkle_root_config),
        create_writable_signer(payer),
        create_write(key_or_program(escrow_fee_receiver, program_id)),
        create_read(SYSTEM_PROGRAM_ID),
        create_read(event_authority),
        create_read(program),
    ];

    let mut data = vec![0; Discriminator::LEN + 8 + len_array_vector(proof)];
    let mut i = CREATE_PERMISSIONED_ESCROW_DISCRIMINATOR.write(&mut data, 0);
    i += bytes::put_u64(&mut data, i, max_cap);
    write_array_vector(proof, &mut data, i);

    build_instruction(program_id, accounts, data)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePermissionedEscrowIxData {
    pub max_cap: u64,
    pub proof: Vec<[u8; 32]>,
}

impl CreatePermissionedEscrowIxData {
    pub fn read(data: &[u8]) -> Result<Self, CodecError> {
        let mut decoder = Decoder::new(data);
        decoder.expect_discriminator(
            &CREATE_PERMISSIONED_ESCROW_DISCRIMINATOR,
            "create_permissioned_escrow",
        )?;
        Ok(Self {
            max_cap: decoder.u64()?,
            proof: decoder.array_vector::<32>()?,
        })
    }
}

pub const DEPOSIT_DISCRIMINATOR: Discriminator =
    Discriminator::new([242, 35, 198, 137, 82, 225, 242, 182]);

#[allow(clippy::too_many_arguments)]
pub fn deposit(
    program_id: &Pubkey,
    vault: Pubkey,
    pool: Pubkey,
    escrow: Pubkey,
    source_token: Pubkey,
    token_vault: Pubkey,
    token_mint: Pubkey,
    token_program: Pubkey,
    owner: Pubkey,
    event_authority: Pubkey,
    program: Pubkey,
    max_amount: u64,
) -> Instruction {
    let accounts = vec![
        create_write(vault),
        create_read(pool),
        create_write(escrow),
        create_write(source_token),
        create_write(token_vault),
        create_read(token_mint),
        create_read(token_program),
        create_read_only_signer(owner),
        create_read(event_authority),
        create_read(program),
    ];

    let mut data = vec![0; DepositIxData::BYTES];
    let i = DEPOSIT_DISCRIMINATOR.write(&mut data, 0);
    bytes::put_u64(&mut data, i, max_amount);

    build_instruction(program_id, accounts, data)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositIxData {
    pub max_amount: u64,
}

impl DepositIxData {
    pub const BYTES: usize = Discriminator::LEN + 8;

    pub fn read(data: &[u8]) -> Result<Self, CodecError> {
        let mut decoder = Decoder::new(data);
        decoder.expect_discriminator(&DEPOSIT_DISCRIMINATOR, "deposit")?;
        Ok(Self {
            max_amount: decoder.u64()?,
        })
    }
}

// ===========================================================================
// Accounts
// ===========================================================================

/// One whitelist Merkle root for a vault. A vault can rotate roots by
/// bumping `version`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MerkleRootConfig {
    pub address: Option<Pubkey>,
    /// Root of the deposit whitelist tree.
    pub root: [u8; 32],
    pub vault: Pubkey,
    pub version: u64,
    pub padding: [u64; 8],
}

impl MerkleRootConfig {
    pub const ROOT_OFFSET: usize = 8;
    pub const VAULT_OFFSET: usize = 40;
    pub const VERSION_OFFSET: usize = 72;
    pub const PADDING_OFFSET: usize = 80;

    pub fn vault_filter(vault: &Pubkey) -> Filter {
        Filter::memcmp_pubkey(Self::VAULT_OFFSET, vault)
    }

    pub fn version_filter(version: u64) -> Filter {
        Filter::memcmp(Self::VERSION_OFFSET, &version.to_le_bytes())
    }
}

impl AccountSerde for MerkleRootConfig {
    const KIND: &'static str = "MerkleRootConfig";
    const DISCRIMINATOR: Discriminator = Discriminator::new([103, 2, 222, 217, 73, 50, 187, 39]);
    const BYTES: usize = 144;

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
            root: decoder.array::<32>()?,
            vault: decoder.pubkey()?,
            version: decoder.u64()?,
            padding: decoder.u64_array::<8>()?,
        })
    }

    fn write(&self, data: &mut [u8], offset: usize) -> usize {
        let mut i = offset;
        i += Self::DISCRIMINATOR.write(data, i);
        i += bytes::put_array(data, i, &self.root);
        i += bytes::put_pubkey(data, i, &self.vault);
        i += bytes::put_u64(data, i, self.version);
        i += bytes::put_u64_array(data, i, &self.padding);
        i - offset
    }
}

// ===========================================================================
// Errors
// ===========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[repr(u32)]
pub enum AlphaVaultError {
    #[error("Time point is not in future")]
    TimePointNotInFuture = 6000,
    #[error("Token mint is incorrect")]
    IncorrectTokenMint = 6001,
    #[error("Pair is not permissioned")]
    IncorrectPairType = 6002,
    #[error("Pool has started")]
    PoolHasStarted = 6003,
    #[error("This action is not permitted in this time point")]
    NotPermitThisActionInThisTimePoint = 6004,
    #[error("The sale is on going, cannot withdraw")]
    TheSaleIsOngoing = 6005,
    #[error("Escrow is not closable")]
    EscrowIsNotClosable = 6006,
    #[error("Time point orders are incorrect")]
    TimePointOrdersAreIncorrect = 6007,
    #[error("Escrow has refunded")]
    EscrowHasRefunded = 6008,
    #[error("Math operation overflow")]
    MathOverflow = 6009,
    #[error("Max buying cap is zero")]
    MaxBuyingCapIsZero = 6010,
    #[error("Max amount is too small")]
    MaxAmountIsTooSmall = 6011,
    #[error("Pool type is not supported")]
    PoolTypeIsNotSupported = 6012,
    #[error("Invalid admin")]
    InvalidAdmin = 6013,
    #[error("Vault mode is incorrect")]
    VaultModeIsIncorrect = 6014,
    #[error("Max depositing cap is invalid")]
    MaxDepositingCapIsInValid = 6015,
    #[error("Vesting duration is invalid")]
    VestingDurationIsInValid = 6016,
    #[error("Deposit amount is zero")]
    DepositAmountIsZero = 6017,
    #[error("Pool owner is mismatched")]
    PoolOwnerIsMismatched = 6018,
    #[error("Withdraw amount is zero")]
    WithdrawAmountIsZero = 6019,
    #[error("Depositing duration is invalid")]
    DepositingDurationIsInvalid = 6020,
    #[error("Depositing time point is invalid")]
    DepositingTimePointIsInvalid = 6021,
    #[error("Individual depositing cap is zero")]
    IndividualDepositingCapIsZero = 6022,
    #[error("Invalid fee receiver account")]
    InvalidFeeReceiverAccount = 6023,
    #[error("Not permissioned vault")]
    NotPermissionedVault = 6024,
    #[error("Not permit to do this action")]
    NotPermitToDoThisAction = 6025,
    #[error("Invalid Merkle proof")]
    InvalidProof = 6026,
    #[error("Invalid activation type")]
    InvalidActivationType = 6027,
    #[error("Activation type is mismatched")]
    ActivationTypeIsMismatched = 6028,
    #[error("Pool is not connected to the alpha vault")]
    InvalidPool = 6029,
    #[error("Invalid creator")]
    InvalidCreator = 6030,
    #[error("Permissioned vault cannot charge escrow fee")]
    PermissionedVaultCannotChargeEscrowFee = 6031,
    #[error("Escrow fee too high")]
    EscrowFeeTooHigh = 6032,
    #[error("Lock duration is invalid")]
    LockDurationInvalid = 6033,
    #[error("Max buying cap is too small")]
    MaxBuyingCapIsTooSmall = 6034,
    #[error("Max depositing cap is too small")]
    MaxDepositingCapIsTooSmall = 6035,
    #[error("Invalid whitelist wallet mode")]
    InvalidWhitelistWalletMode = 6036,
    #[error("Invalid crank fee whitelist")]
    InvalidCrankFeeWhitelist = 6037,
    #[error("Missing fee receiver")]
    MissingFeeReceiver = 6038,
    #[error("Discriminator is mismatched")]
    DiscriminatorIsMismatched = 6039,
}

impl AlphaVaultError {
    pub fn from_code(code: u32) -> Result<Self, CodecError> {
        Ok(match code {
            6000 => Self::TimePointNotInFuture,
            6001 => Self::IncorrectTokenMint,
            6002 => Self::IncorrectPairType,
            6003 => Self::PoolHasStarted,
            6004 => Self::NotPermitThisActionInThisTimePoint,
            6005 => Self::TheSaleIsOngoing,
            6006 => Self::EscrowIsNotClosable,
            6007 => Self::TimePointOrdersAreIncorrect,
            6008 => Self::EscrowHasRefunded,
            6009 => Self::MathOverflow,
            6010 => Self::MaxBuyingCapIsZero,
            6011 => Self::MaxAmountIsTooSmall,
            6012 => Self::PoolTypeIsNotSupported,
            6013 => Self::InvalidAdmin,
            6014 => Self::VaultModeIsIncorrect,
            6015 => Self::MaxDepositingCapIsInValid,
            6016 => Self::VestingDurationIsInValid,
            6017 => Self::DepositAmountIsZero,
            6018 => Self::PoolOwnerIsMismatched,
            6019 => Self::WithdrawAmountIsZero,
            6020 => Self::DepositingDurationIsInvalid,
            6021 => Self::DepositingTimePointIsInvalid,
            6022 => Self::IndividualDepositingCapIsZero,
            6023 => Self::InvalidFeeReceiverAccount,
            6024 => Self::NotPermissionedVault,
            6025 => Self::NotPermitToDoThisAction,
            6026 => Self::InvalidProof,
            6027 => Self::InvalidActivationType,
            6028 => Self::ActivationTypeIsMismatched,
            6029 => Self::InvalidPool,
            6030 => Self::InvalidCreator,
            6031 => Self::PermissionedVaultCannotChargeEscrowFee,
            6032 => Self::EscrowFeeTooHigh,
            6033 => Self::LockDurationInvalid,
            6034 => Self::MaxBuyingCapIsTooSmall,
            6035 => Self::MaxDepositingCapIsTooSmall,
            6036 => Self::InvalidWhitelistWalletMode,
            6037 => Self::InvalidCrankFeeWhitelist,
            6038 => Self::MissingFeeReceiver,
            6039 => Self::DiscriminatorIsMismatched,
            _ => {
                return Err(CodecError::UnknownErrorCode {
                    program: "alpha_vault",
                    code,
                })
            }
        })
    }

    pub const fn code(self) -> u32 {
        self as u32
    }
}
