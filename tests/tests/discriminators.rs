//! Discriminator derivation and the exact-match gate.

use anchor_codec::programs::{glam, jito_steward, kamino_lend};
use anchor_codec::{CodecError, Discriminator};
use anchor_codec_tests::{account_discriminator, global_discriminator};

#[test]
fn instruction_tags_hash_the_global_namespace() {
    assert_eq!(
        Discriminator::anchor_instruction("close_state").to_bytes(),
        global_discriminator("close_state")
    );
    assert_eq!(
        glam::CLOSE_STATE_DISCRIMINATOR,
        Discriminator::anchor_instruction("close_state")
    );
    assert_eq!(
        kamino_lend::INIT_LENDING_MARKET_DISCRIMINATOR,
        Discriminator::anchor_instruction("init_lending_market")
    );
    assert_eq!(
        jito_steward::RESUME_STEWARD_DISCRIMINATOR,
        Discriminator::anchor_instruction("resume_steward")
    );
}

#[test]
fn account_tags_hash_the_account_namespace() {
    assert_eq!(
        Discriminator::anchor_account("UserMetadata").to_bytes(),
        account_discriminator("UserMetadata")
    );
    // Same name, different namespace, different tag.
    assert_ne!(
        Discriminator::anchor_account("deposit"),
        Discriminator::anchor_instruction("deposit")
    );
}

#[test]
fn parse_reads_eight_bytes_at_offset() {
    let data = [0u8, 0, 1, 2, 3, 4, 5, 6, 7, 8];
    let parsed = Discriminator::parse(&data, 2).unwrap();
    assert_eq!(parsed.to_bytes(), [1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn parse_fails_on_short_buffer() {
    let data = [1u8, 2, 3];
    assert_eq!(
        Discriminator::parse(&data, 0).unwrap_err(),
        CodecError::Truncated {
            offset: 0,
            needed: 8,
            have: 3,
        }
    );
}

#[test]
fn expect_returns_offset_past_tag() {
    let tag = Discriminator::new([9, 9, 9, 9, 9, 9, 9, 9]);
    let mut data = [0u8; 12];
    tag.write(&mut data, 0);
    assert_eq!(tag.expect(&data, 0, "sample").unwrap(), 8);
}

#[test]
fn expect_reports_both_tags_on_mismatch() {
    let expected = Discriminator::new([1; 8]);
    let data = [2u8; 8];
    let err = expected.expect(&data, 0, "sample").unwrap_err();
    assert_eq!(
        err,
        CodecError::DiscriminatorMismatch {
            kind: "sample",
            expected,
            found: Discriminator::new([2; 8]),
        }
    );
}
