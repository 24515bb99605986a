//! Account record layouts: decode/encode cycles, field offsets and the
//! discriminator gate.

use anchor_codec::programs::{alpha_vault, autocrat, kamino_lend};
use anchor_codec::{AccountSerde, CodecError, Filter};
use anchor_codec_tests::{account_discriminator, test_key};

fn sample_user_metadata() -> kamino_lend::UserMetadata {
    kamino_lend::UserMetadata {
        address: Some(test_key(1)),
        referrer: test_key(2),
        bump: 254,
        user_lookup_table: test_key(3),
        owner: test_key(4),
        padding_1: [0xAA; 51],
        padding_2: [0xBB; 64],
    }
}

#[test]
fn user_metadata_round_trips_with_padding() {
    let account = sample_user_metadata();

    let mut data = vec![0u8; kamino_lend::UserMetadata::BYTES];
    assert_eq!(account.write(&mut data, 0), kamino_lend::UserMetadata::BYTES);

    let decoded = kamino_lend::UserMetadata::read(Some(test_key(1)), &data).unwrap();
    assert_eq!(decoded, account);
}

#[test]
fn user_metadata_field_offsets() {
    let account = sample_user_metadata();
    let mut data = vec![0u8; kamino_lend::UserMetadata::BYTES];
    account.write(&mut data, 0);

    let r = kamino_lend::UserMetadata::REFERRER_OFFSET;
    assert_eq!(&data[r..r + 32], test_key(2).as_ref());
    let b = kamino_lend::UserMetadata::BUMP_OFFSET;
    assert_eq!(&data[b..b + 8], &254u64.to_le_bytes());
    let o = kamino_lend::UserMetadata::OWNER_OFFSET;
    assert_eq!(&data[o..o + 32], test_key(4).as_ref());
    assert_eq!(kamino_lend::UserMetadata::PADDING_2_OFFSET, 520);
}

#[test]
fn user_metadata_discriminator_matches_account_name_hash() {
    assert_eq!(
        kamino_lend::UserMetadata::DISCRIMINATOR.to_bytes(),
        account_discriminator("UserMetadata")
    );
    assert_eq!(
        autocrat::Dao::DISCRIMINATOR.to_bytes(),
        account_discriminator("Dao")
    );
    assert_eq!(
        alpha_vault::MerkleRootConfig::DISCRIMINATOR.to_bytes(),
        account_discriminator("MerkleRootConfig")
    );
}

#[test]
fn user_metadata_rejects_short_buffer() {
    let data = vec![0u8; kamino_lend::UserMetadata::BYTES - 1];
    assert_eq!(
        kamino_lend::UserMetadata::read(None, &data).unwrap_err(),
        CodecError::Truncated {
            offset: 0,
            needed: kamino_lend::UserMetadata::BYTES,
            have: kamino_lend::UserMetadata::BYTES - 1,
        }
    );
}

#[test]
fn user_metadata_rejects_foreign_discriminator() {
    let mut data = vec![0u8; kamino_lend::UserMetadata::BYTES];
    sample_user_metadata().write(&mut data, 0);
    data[..8].copy_from_slice(&account_discriminator("Dao"));

    let err = kamino_lend::UserMetadata::read(None, &data).unwrap_err();
    assert!(matches!(
        err,
        CodecError::DiscriminatorMismatch {
            kind: "UserMetadata",
            ..
        }
    ));
}

#[test]
fn merkle_root_config_round_trips() {
    let account = alpha_vault::MerkleRootConfig {
        address: None,
        root: [0x5A; 32],
        vault: test_key(7),
        version: 3,
        padding: [0; 8],
    };

    let mut data = vec![0u8; alpha_vault::MerkleRootConfig::BYTES];
    assert_eq!(account.write(&mut data, 0), 144);

    let v = alpha_vault::MerkleRootConfig::VAULT_OFFSET;
    assert_eq!(&data[v..v + 32], test_key(7).as_ref());

    let decoded = alpha_vault::MerkleRootConfig::read(None, &data).unwrap();
    assert_eq!(decoded, account);
}

#[test]
fn dao_round_trips() {
    let account = autocrat::Dao {
        address: None,
        treasury_pda_bump: 255,
        treasury: test_key(10),
        token_mint: test_key(11),
        usdc_mint: test_key(12),
        proposal_count: 17,
        pass_threshold_bps: 300,
        slots_per_proposal: 648_000,
        twap_initial_observation: 1_000_000_000_000,
        twap_max_observation_change_per_update: 2_000,
        min_quote_futarchic_liquidity: 5_000_000,
        min_base_futarchic_liquidity: 1_000_000,
        seq_num: 9,
    };

    let mut data = vec![0u8; autocrat::Dao::BYTES];
    assert_eq!(account.write(&mut data, 0), 175);

    let t = autocrat::Dao::TWAP_INITIAL_OBSERVATION_OFFSET;
    assert_eq!(&data[t..t + 16], &1_000_000_000_000u128.to_le_bytes());
    let s = autocrat::Dao::SEQ_NUM_OFFSET;
    assert_eq!(&data[s..s + 8], &9u64.to_le_bytes());

    let decoded = autocrat::Dao::read(None, &data).unwrap();
    assert_eq!(decoded, account);
}

#[test]
fn size_and_discriminator_filters() {
    assert_eq!(
        kamino_lend::UserMetadata::size_filter(),
        Filter::data_size(1032)
    );
    assert_eq!(
        autocrat::Dao::discriminator_filter(),
        Filter::memcmp(0, &account_discriminator("Dao"))
    );
}

#[test]
fn field_filters_point_at_field_offsets() {
    let owner = test_key(4);
    assert_eq!(
        kamino_lend::UserMetadata::owner_filter(&owner),
        Filter::memcmp(kamino_lend::UserMetadata::OWNER_OFFSET, owner.as_ref())
    );
    assert_eq!(
        alpha_vault::MerkleRootConfig::version_filter(3),
        Filter::memcmp(
            alpha_vault::MerkleRootConfig::VERSION_OFFSET,
            &3u64.to_le_bytes()
        )
    );
    assert_eq!(
        autocrat::Dao::pass_threshold_bps_filter(300),
        Filter::memcmp(
            autocrat::Dao::PASS_THRESHOLD_BPS_OFFSET,
            &300u16.to_le_bytes()
        )
    );
}
