use beacon_draw::mac::hmac_sha256;
use hmac::{Hmac, Mac};
use proptest::prelude::*;

fn reference(key: &[u8], message: &[u8]) -> [u8; 32] {
    let mut mac = Hmac::<sha2::Sha256>::new_from_slice(key).expect("any key length is valid");
    mac.update(message);

    let mut out = [0u8; 32];
    out.copy_from_slice(&mac.finalize().into_bytes());
    out
}

// RFC 4231 test case 1
#[test]
fn hmac_rfc4231_case_1() {
    let tag = hmac_sha256(&[0x0b; 20], b"Hi There");

    assert_eq!(
        hex::encode(tag),
        "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7"
    );
}

// RFC 4231 test case 2
#[test]
fn hmac_rfc4231_case_2() {
    let tag = hmac_sha256(b"Jefe", b"what do ya want for nothing?");

    assert_eq!(
        hex::encode(tag),
        "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
    );
}

// RFC 4231 test case 6: key longer than the block size
#[test]
fn hmac_rfc4231_case_6() {
    let tag = hmac_sha256(
        &[0xaa; 131],
        b"Test Using Larger Than Block-Size Key - Hash Key First",
    );

    assert_eq!(
        hex::encode(tag),
        "60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54"
    );
}

#[test]
fn hmac_empty_key_and_message() {
    assert_eq!(hmac_sha256(&[], &[]), reference(&[], &[]));
}

#[test]
fn hmac_key_length_boundaries() {
    for len in [63, 64, 65] {
        let key = vec![0x5c; len];
        assert_eq!(hmac_sha256(&key, b"649"), reference(&key, b"649"), "key length {len}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        rng_algorithm: proptest::test_runner::RngAlgorithm::ChaCha,
        rng_seed: proptest::test_runner::RngSeed::Fixed(0x0649),
        .. ProptestConfig::default()
    })]

    #[test]
    fn hmac_matches_rustcrypto(
        key in proptest::collection::vec(any::<u8>(), 0..200),
        message in proptest::collection::vec(any::<u8>(), 0..300),
    ) {
        prop_assert_eq!(hmac_sha256(&key, &message), reference(&key, &message));
    }
}
