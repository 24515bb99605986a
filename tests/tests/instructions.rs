//! Instruction builder shapes: positional account lists, signer and
//! writability roles, payload layouts and the optional-account sentinel.

use anchor_codec::codec::Codec;
use anchor_codec::instruction::{RENT_SYSVAR_ID, SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID};
use anchor_codec::programs::{alpha_vault, autocrat, glam, jito_steward, kamino_lend, sb_on_demand};
use anchor_codec::CodecError;
use anchor_codec_tests::{account_keys, account_roles, global_discriminator, test_key};

#[test]
fn deposit_payload_is_discriminator_plus_amount() {
    let ix = alpha_vault::deposit(
        &alpha_vault::ID,
        test_key(1),
        test_key(2),
        test_key(3),
        test_key(4),
        test_key(5),
        test_key(6),
        test_key(7),
        test_key(8),
        test_key(9),
        test_key(10),
        123_456_789,
    );

    assert_eq!(ix.program_id, alpha_vault::ID);
    assert_eq!(ix.data.len(), 16);
    assert_eq!(&ix.data[..8], &global_discriminator("deposit"));
    assert_eq!(&ix.data[8..], &123_456_789u64.to_le_bytes());

    let decoded = alpha_vault::DepositIxData::read(&ix.data).unwrap();
    assert_eq!(decoded.max_amount, 123_456_789);

    // vault W, pool R, escrow W, source W, token_vault W, mint R,
    // token_program R, owner ROS, event_authority R, program R
    assert_eq!(
        account_roles(&ix),
        vec![
            (false, true),
            (false, false),
            (false, true),
            (false, true),
            (false, true),
            (false, false),
            (false, false),
            (true, false),
            (false, false),
            (false, false),
        ]
    );
}

#[test]
fn close_state_fills_absent_metadata_with_program_id() {
    let ix = glam::close_state(&glam::ID, test_key(1), test_key(2), test_key(3), None);

    assert_eq!(ix.data.len(), 8);
    assert_eq!(&ix.data[..8], &global_discriminator("close_state"));

    let keys = account_keys(&ix);
    assert_eq!(keys[3], glam::ID);
    assert_eq!(keys[4], SYSTEM_PROGRAM_ID);
    assert_eq!(
        account_roles(&ix),
        vec![
            (false, true),
            (false, true),
            (true, true),
            (false, true),
            (false, false),
        ]
    );
}

#[test]
fn close_state_keeps_present_metadata_key() {
    let metadata = test_key(9);
    let ix = glam::close_state(&glam::ID, test_key(1), test_key(2), test_key(3), Some(metadata));
    assert_eq!(account_keys(&ix)[3], metadata);
}

#[test]
fn enable_disable_protocols_payload_layout() {
    let integration = test_key(5);
    let ix = glam::enable_disable_protocols(
        &glam::ID,
        test_key(1),
        test_key(2),
        &integration,
        0b1010,
        true,
    );

    assert_eq!(ix.data.len(), glam::EnableDisableProtocolsIxData::BYTES);
    assert_eq!(ix.data.len(), 43);
    assert_eq!(&ix.data[8..40], integration.as_ref());
    assert_eq!(&ix.data[40..42], &0b1010u16.to_le_bytes());
    assert_eq!(ix.data[42], 1);

    let decoded = glam::EnableDisableProtocolsIxData::read(&ix.data).unwrap();
    assert_eq!(decoded.integration_program, integration);
    assert_eq!(decoded.protocols_bitmask, 0b1010);
    assert!(decoded.set_enabled);
}

#[test]
fn init_lending_market_accounts_and_payload() {
    let quote = *b"USD\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0";
    let ix = kamino_lend::init_lending_market(
        &kamino_lend::ID,
        test_key(1),
        test_key(2),
        test_key(3),
        &quote,
    );

    assert_eq!(ix.data.len(), 40);
    assert_eq!(&ix.data[8..], &quote);

    let keys = account_keys(&ix);
    assert_eq!(keys[3], SYSTEM_PROGRAM_ID);
    assert_eq!(keys[4], RENT_SYSVAR_ID);
    assert_eq!(account_roles(&ix)[0], (true, true));

    let decoded = kamino_lend::InitLendingMarketIxData::read(&ix.data).unwrap();
    assert_eq!(decoded.quote_currency, quote);
}

#[test]
fn update_lending_market_value_buffer_is_fixed_width() {
    let mut value = [0u8; 72];
    kamino_lend::UpdateLendingMarketConfigValue::U64(42).write(&mut value, 0);

    let ix = kamino_lend::update_lending_market(
        &kamino_lend::ID,
        test_key(1),
        test_key(2),
        4,
        &value,
    );

    assert_eq!(ix.data.len(), 88);
    assert_eq!(account_roles(&ix), vec![(true, false), (false, true)]);

    let decoded = kamino_lend::UpdateLendingMarketIxData::read(&ix.data).unwrap();
    assert_eq!(decoded.mode, 4);
    assert_eq!(decoded.value, value);
}

#[test]
fn init_user_metadata_referrer_slot_is_plain_read() {
    let referrer = test_key(4);
    let lookup_table = test_key(5);
    let ix = kamino_lend::init_user_metadata(
        &kamino_lend::ID,
        test_key(1),
        test_key(2),
        test_key(3),
        referrer,
        &lookup_table,
    );

    let keys = account_keys(&ix);
    assert_eq!(keys[3], referrer);
    assert_eq!(keys[4], RENT_SYSVAR_ID);
    assert_eq!(keys[5], SYSTEM_PROGRAM_ID);
    assert_eq!(
        account_roles(&ix),
        vec![
            (true, false),
            (true, true),
            (false, true),
            (false, false),
            (false, false),
            (false, false),
        ]
    );
    assert_eq!(&ix.data[8..40], lookup_table.as_ref());
}

#[test]
fn pause_steward_is_discriminator_only() {
    let ix = jito_steward::pause_steward(&jito_steward::ID, test_key(1), test_key(2));
    assert_eq!(ix.data, global_discriminator("pause_steward"));
    assert_eq!(account_roles(&ix), vec![(false, true), (true, true)]);
}

#[test]
fn update_parameters_encodes_only_present_fields() {
    let args = jito_steward::UpdateParametersArgs {
        commission_threshold: Some(8),
        num_epochs_between_scoring: Some(10),
        ..Default::default()
    };
    // 16 absent flags, one flagged u8, one flagged u64
    assert_eq!(args.encoded_len(), 16 + 2 + 1 + 8);

    let ix = jito_steward::update_parameters(&jito_steward::ID, test_key(1), test_key(2), &args);
    assert_eq!(ix.data.len(), 8 + 27);

    let decoded = jito_steward::UpdateParametersIxData::read(&ix.data).unwrap();
    assert_eq!(decoded.args, args);
}

#[test]
fn create_permissioned_escrow_carries_proof_and_sentinel() {
    let proof = vec![[0x11u8; 32], [0x22u8; 32], [0x33u8; 32]];
    let ix = alpha_vault::create_permissioned_escrow(
        &alpha_vault::ID,
        test_key(1),
        test_key(2),
        test_key(3),
        test_key(4),
        test_key(5),
        test_key(6),
        None,
        test_key(7),
        test_key(8),
        1_000,
        &proof,
    );

    assert_eq!(account_keys(&ix)[6], alpha_vault::ID);
    assert_eq!(ix.data.len(), 8 + 8 + 4 + 3 * 32);

    let decoded = alpha_vault::CreatePermissionedEscrowIxData::read(&ix.data).unwrap();
    assert_eq!(decoded.max_cap, 1_000);
    assert_eq!(decoded.proof, proof);
}

#[test]
fn pull_feed_set_configs_round_trips_sparse_params() {
    let params = sb_on_demand::PullFeedSetConfigsParams {
        max_variance: Some(1_000_000),
        min_responses: Some(3),
        min_sample_size: Some(1),
        ..Default::default()
    };

    let ix = sb_on_demand::pull_feed_set_configs(
        &sb_on_demand::ID,
        test_key(1),
        test_key(2),
        &params,
    );
    assert_eq!(account_roles(&ix), vec![(false, true), (true, false)]);
    assert_eq!(ix.data.len(), 8 + params.encoded_len());

    let decoded = sb_on_demand::PullFeedSetConfigsIxData::read(&ix.data).unwrap();
    assert_eq!(decoded.params, params);
}

#[test]
fn finalize_proposal_pins_token_program_slot() {
    let ix = autocrat::finalize_proposal(
        &autocrat::ID,
        test_key(1),
        test_key(2),
        test_key(3),
        test_key(4),
        test_key(5),
        test_key(6),
        test_key(7),
        test_key(8),
        test_key(9),
        test_key(10),
        test_key(11),
        test_key(12),
        test_key(13),
        test_key(14),
    );

    assert_eq!(ix.accounts.len(), 15);
    assert_eq!(account_keys(&ix)[10], TOKEN_PROGRAM_ID);
    assert_eq!(ix.data.len(), 8);
}

#[test]
fn ix_data_read_rejects_wrong_discriminator() {
    let mut data = vec![0u8; 16];
    data[..8].copy_from_slice(&global_discriminator("withdraw"));

    let err = alpha_vault::DepositIxData::read(&data).unwrap_err();
    assert!(matches!(
        err,
        CodecError::DiscriminatorMismatch { kind: "deposit", .. }
    ));
}

#[test]
fn config_value_ordinal_prefixes_variant_payload() {
    let value = kamino_lend::UpdateLendingMarketConfigValue::U64(42);
    assert_eq!(value.ordinal(), 4);
    assert_eq!(value.encoded_len(), 9);

    let mut data = [0u8; 9];
    assert_eq!(value.write(&mut data, 0), 9);
    assert_eq!(data[0], 4);
    assert_eq!(&data[1..], &42u64.to_le_bytes());

    let mut decoder = anchor_codec::Decoder::new(&data);
    let decoded = kamino_lend::UpdateLendingMarketConfigValue::read(&mut decoder).unwrap();
    assert_eq!(decoded, value);
}

#[test]
fn config_value_rejects_unknown_ordinal() {
    let data = [9u8, 0, 0, 0, 0, 0, 0, 0, 0];
    let mut decoder = anchor_codec::Decoder::new(&data);
    assert_eq!(
        kamino_lend::UpdateLendingMarketConfigValue::read(&mut decoder).unwrap_err(),
        CodecError::UnknownOrdinal {
            kind: "UpdateLendingMarketConfigValue",
            ordinal: 9,
        }
    );
}

#[test]
fn elevation_group_variant_round_trips() {
    let group = kamino_lend::ElevationGroup {
        max_liquidation_bonus_bps: 500,
        id: 1,
        ltv_pct: 80,
        liquidation_threshold_pct: 85,
        allow_new_loans: 1,
        max_reserves_as_collateral: 4,
        padding_0: 0,
        debt_reserve: test_key(20),
        padding_1: [0; 4],
    };
    let value = kamino_lend::UpdateLendingMarketConfigValue::ElevationGroup(group);
    assert_eq!(value.encoded_len(), 1 + 72);

    let mut data = [0u8; 73];
    value.write(&mut data, 0);
    assert_eq!(data[0], 7);

    let mut decoder = anchor_codec::Decoder::new(&data);
    assert_eq!(
        kamino_lend::UpdateLendingMarketConfigValue::read(&mut decoder).unwrap(),
        value
    );
}
