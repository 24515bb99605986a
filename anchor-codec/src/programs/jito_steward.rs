//! Jito stake pool steward bindings.

use solana_instruction::Instruction;
use solana_pubkey::{pubkey, Pubkey};

use crate::codec::{len_option, write_option, Codec, Decoder};
use crate::discriminator::Discriminator;
use crate::error::CodecError;
use crate::instruction::{build_instruction, create_writable_signer, create_write};

pub const ID: Pubkey = pubkey!("Stewardf95sJbmtcZsyagb2dg4Mo8eVQho8gpECvLx8");

// ===========================================================================
// Types
// ===========================================================================

/// Partial update of the steward's scoring and unstaking parameters.
/// Every field is optional; absent fields leave the on-chain value
/// untouched. Field order is the wire order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UpdateParametersArgs {
    pub mev_commission_range: Option<u16>,
    pub epoch_credits_range: Option<u16>,
    pub commission_range: Option<u16>,
    pub scoring_delinquency_threshold_ratio: Option<f64>,
    pub instant_unstake_delinquency_threshold_ratio: Option<f64>,
    pub mev_commission_bps_threshold: Option<u16>,
    pub commission_threshold: Option<u8>,
    pub historical_commission_threshold: Option<u8>,
    pub num_delegation_validators: Option<u32>,
    pub scoring_unstake_cap_bps: Option<u32>,
    pub instant_unstake_cap_bps: Option<u32>,
    pub stake_deposit_unstake_cap_bps: Option<u32>,
    pub instant_unstake_epoch_progress: Option<f64>,
    pub compute_score_slot_range: Option<u64>,
    pub instant_unstake_inputs_epoch_progress: Option<f64>,
    pub num_epochs_between_scoring: Option<u64>,
    pub minimum_stake_lamports: Option<u64>,
    pub minimum_voting_epochs: Option<u64>,
}

impl UpdateParametersArgs {
    pub fn read(decoder: &mut Decoder) -> Result<Self, CodecError> {
        Ok(Self {
            mev_commission_range: decoder.option_u16()?,
            epoch_credits_range: decoder.option_u16()?,
            commission_range: decoder.option_u16()?,
            scoring_delinquency_threshold_ratio: decoder.option_f64()?,
            instant_unstake_delinquency_threshold_ratio: decoder.option_f64()?,
            mev_commission_bps_threshold: decoder.option_u16()?,
            commission_threshold: decoder.option_u8()?,
            historical_commission_threshold: decoder.option_u8()?,
            num_delegation_validators: decoder.option_u32()?,
            scoring_unstake_cap_bps: decoder.option_u32()?,
            instant_unstake_cap_bps: decoder.option_u32()?,
            stake_deposit_unstake_cap_bps: decoder.option_u32()?,
            instant_unstake_epoch_progress: decoder.option_f64()?,
            compute_score_slot_range: decoder.option_u64()?,
            instant_unstake_inputs_epoch_progress: decoder.option_f64()?,
            num_epochs_between_scoring: decoder.option_u64()?,
            minimum_stake_lamports: decoder.option_u64()?,
            minimum_voting_epochs: decoder.option_u64()?,
        })
    }
}

impl Codec for UpdateParametersArgs {
    fn encoded_len(&self) -> usize {
        len_option(&self.mev_commission_range)
            + len_option(&self.epoch_credits_range)
            + len_option(&self.commission_range)
            + len_option(&self.scoring_delinquency_threshold_ratio)
            + len_option(&self.instant_unstake_delinquency_threshold_ratio)
            + len_option(&self.mev_commission_bps_threshold)
            + len_option(&self.commission_threshold)
            + len_option(&self.historical_commission_threshold)
            + len_option(&self.num_delegation_validators)
            + len_option(&self.scoring_unstake_cap_bps)
            + len_option(&self.instant_unstake_cap_bps)
            + len_option(&self.stake_deposit_unstake_cap_bps)
            + len_option(&self.instant_unstake_epoch_progress)
            + len_option(&self.compute_score_slot_range)
            + len_option(&self.instant_unstake_inputs_epoch_progress)
            + len_option(&self.num_epochs_between_scoring)
            + len_option(&self.minimum_stake_lamports)
            + len_option(&self.minimum_voting_epochs)
    }

    fn write(&self, data: &mut [u8], offset: usize) -> usize {
        let mut i = offset;
        i += write_option(&self.mev_commission_range, data, i);
        i += write_option(&self.epoch_credits_range, data, i);
        i += write_option(&self.commission_range, data, i);
        i += write_option(&self.scoring_delinquency_threshold_ratio, data, i);
        i += write_option(&self.instant_unstake_delinquency_threshold_ratio, data, i);
        i += write_option(&self.mev_commission_bps_threshold, data, i);
        i += write_option(&self.commission_threshold, data, i);
        i += write_option(&self.historical_commission_threshold, data, i);
        i += write_option(&self.num_delegation_validators, data, i);
        i += write_option(&self.scoring_unstake_cap_bps, data, i);
        i += write_option(&self.instant_unstake_cap_bps, data, i);
        i += write_option(&self.stake_deposit_unstake_cap_bps, data, i);
        i += write_option(&self.instant_unstake_epoch_progress, data, i);
        i += write_option(&self.compute_score_slot_range, data, i);
        i += write_option(&self.instant_unstake_inputs_epoch_progress, data, i);
        i += write_option(&self.num_epochs_between_scoring, data, i);
        i += write_option(&self.minimum_stake_lamports, data, i);
        i += write_option(&self.minimum_voting_epochs, data, i);
        i - offset
    }
}

// ===========================================================================
// Instructions
// ===========================================================================

pub const PAUSE_STEWARD_DISCRIMINATOR: Discriminator =
    Discriminator::new([214, 85, 52, 67, 192, 238, 178, 102]);

pub fn pause_steward(program_id: &Pubkey, config: Pubkey, authority: Pubkey) -> Instruction {
    let accounts = vec![create_write(config), create_writable_signer(authority)];

    let mut data = vec![0; Discriminator::LEN];
    PAUSE_STEWARD_DISCRIMINATOR.write(&mut data, 0);

    build_instruction(program_id, accounts, data)
}

pub const RESUME_STEWARD_DISCRIMINATOR: Discriminator =
    Discriminator::new([25, 71, 153, 183, 197, 197, 187, 3]);

pub fn resume_steward(program_id: &Pubkey, config: Pubkey, authority: Pubkey) -> Instruction {
    let accounts = vec![create_write(config), create_writable_signer(authority)];

    let mut data = vec![0; Discriminator::LEN];
    RESUME_STEWARD_DISCRIMINATOR.write(&mut data, 0);

    build_instruction(program_id, accounts, data)
}

pub const UPDATE_PARAMETERS_DISCRIMINATOR: Discriminator =
    Discriminator::new([116, 107, 24, 207, 101, 49, 213, 77]);

pub fn update_parameters(
    program_id: &Pubkey,
    config: Pubkey,
    authority: Pubkey,
    args: &UpdateParametersArgs,
) -> Instruction {
    let accounts = vec![create_write(config), create_writable_signer(authority)];

    let mut data = vec![0; Discriminator::LEN + args.encoded_len()];
    let i = UPDATE_PARAMETERS_DISCRIMINATOR.write(&mut data, 0);
    args.write(&mut data, i);

    build_instruction(program_id, accounts, data)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdateParametersIxData {
    pub args: UpdateParametersArgs,
}

impl UpdateParametersIxData {
    pub fn read(data: &[u8]) -> Result<Self, CodecError> {
        let mut decoder = Decoder::new(data);
        decoder.expect_discriminator(&UPDATE_PARAMETERS_DISCRIMINATOR, "update_parameters")?;
        Ok(Self {
            args: UpdateParametersArgs::read(&mut decoder)?,
        })
    }
}

// ===========================================================================
// Errors
// ===========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[repr(u32)]
pub enum StewardError {
    #[error("Invalid set authority type: 0: SetAdmin, 1: SetBlacklistAuthority, 2: SetParametersAuthority")]
    InvalidAuthorityType = 6000,
    #[error("Scoring must be completed before any other steps can be taken")]
    ScoringNotComplete = 6001,
    #[error("Validator does not exist at the ValidatorList index provided")]
    ValidatorNotInList = 6002,
    #[error("Unauthorized to perform this action")]
    Unauthorized = 6003,
    #[error("Bitmask index out of bounds")]
    BitmaskOutOfBounds = 6004,
    #[error("Invalid state")]
    InvalidState = 6005,
    #[error("Stake state is not Stake")]
    StakeStateIsNotStake = 6006,
    #[error("Validator not eligible to be added to the pool. Must meet stake minimum")]
    ValidatorBelowStakeMinimum = 6007,
    #[error("Validator not eligible to be added to the pool. Must meet recent voting minimum")]
    ValidatorBelowLivenessMinimum = 6008,
    #[error("Validator History vote data not recent enough to be used for scoring. Must be updated this epoch")]
    VoteHistoryNotRecentEnough = 6009,
    #[error("Validator History stake data not recent enough to be used for scoring. Must be updated this epoch")]
    StakeHistoryNotRecentEnough = 6010,
    #[error("Cluster History data not recent enough to be used for scoring. Must be updated this epoch")]
    ClusterHistoryNotRecentEnough = 6011,
    #[error("Steward State Machine is paused. No state machine actions can be taken")]
    StateMachinePaused = 6012,
    #[error("Config parameter is out of range or otherwise invalid")]
    InvalidParameterValue = 6013,
    #[error("Instant unstake cannot be performed yet.")]
    InstantUnstakeNotReady = 6014,
    #[error("Validator index out of bounds of state machine")]
    ValidatorIndexOutOfBounds = 6015,
    #[error("ValidatorList account type mismatch")]
    ValidatorListTypeMismatch = 6016,
    #[error("An operation caused an overflow/underflow")]
    ArithmeticError = 6017,
    #[error("Validator not eligible for removal. Must be delinquent or have closed vote account")]
    ValidatorNotRemovable = 6018,
    #[error("Validator was marked active when it should be deactivating")]
    ValidatorMarkedActive = 6019,
    #[error("Max validators reached")]
    MaxValidatorsReached = 6020,
    #[error("Epoch Maintenance must be called before continuing")]
    EpochMaintenanceNotComplete = 6021,
    #[error("The stake pool must be updated before continuing")]
    StakePoolNotUpdated = 6022,
    #[error("Epoch Maintenance has already been completed")]
    EpochMaintenanceAlreadyComplete = 6023,
    #[error("Validators are marked for immediate removal")]
    ValidatorsNeedToBeRemoved = 6024,
    #[error("Validator not marked for removal")]
    ValidatorNotMarkedForRemoval = 6025,
    #[error("Validators have not been removed")]
    ValidatorsHaveNotBeenRemoved = 6026,
    #[error("Validator List count does not match state machine")]
    ListStateMismatch = 6027,
    #[error("Vote account does not match")]
    VoteAccountDoesNotMatch = 6028,
    #[error("Validator needs to be marked for removal")]
    ValidatorNeedsToBeMarkedForRemoval = 6029,
    #[error("Invalid stake state")]
    InvalidStakeState = 6030,
}

impl StewardError {
    pub fn from_code(code: u32) -> Result<Self, CodecError> {
        Ok(match code {
            6000 => Self::InvalidAuthorityType,
            6001 => Self::ScoringNotComplete,
            6002 => Self::ValidatorNotInList,
            6003 => Self::Unauthorized,
            6004 => Self::BitmaskOutOfBounds,
            6005 => Self::InvalidState,
            6006 => Self::StakeStateIsNotStake,
            6007 => Self::ValidatorBelowStakeMinimum,
            6008 => Self::ValidatorBelowLivenessMinimum,
            6009 => Self::VoteHistoryNotRecentEnough,
            6010 => Self::StakeHistoryNotRecentEnough,
            6011 => Self::ClusterHistoryNotRecentEnough,
            6012 => Self::StateMachinePaused,
            6013 => Self::InvalidParameterValue,
            6014 => Self::InstantUnstakeNotReady,
            6015 => Self::ValidatorIndexOutOfBounds,
            6016 => Self::ValidatorListTypeMismatch,
            6017 => Self::ArithmeticError,
            6018 => Self::ValidatorNotRemovable,
            6019 => Self::ValidatorMarkedActive,
            6020 => Self::MaxValidatorsReached,
            6021 => Self::EpochMaintenanceNotComplete,
            6022 => Self::StakePoolNotUpdated,
            6023 => Self::EpochMaintenanceAlreadyComplete,
            6024 => Self::ValidatorsNeedToBeRemoved,
            6025 => Self::ValidatorNotMarkedForRemoval,
            6026 => Self::ValidatorsHaveNotBeenRemoved,
            6027 => Self::ListStateMismatch,
            6028 => Self::VoteAccountDoesNotMatch,
            6029 => Self::ValidatorNeedsToBeMarkedForRemoval,
            6030 => Self::InvalidStakeState,
            _ => {
                return Err(CodecError::UnknownErrorCode {
                    program: "steward",
                    code,
                })
            }
        })
    }

    pub const fn code(self) -> u32 {
        self as u32
    }
}
