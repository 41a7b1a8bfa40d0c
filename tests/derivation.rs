use beacon_draw::derivation::{Entropy, MIN_ENTROPY_BITS, Seed, derive_seed};
use beacon_draw::{Error, ErrorKind};

fn zero_entropy() -> String {
    "00".repeat(32)
}

#[test]
fn derive_seed_golden_vectors() {
    let seed_649 = derive_seed(&zero_entropy(), "649").unwrap();
    let seed_max = derive_seed(&zero_entropy(), "max").unwrap();

    assert_eq!(
        hex::encode(seed_649.as_bytes()),
        "a3ae656f2d00353a728ef645e08de68322985031316c447b48b60c6e7d51bf31"
    );
    assert_eq!(
        hex::encode(seed_max.as_bytes()),
        "1432073224bdd622403c8c5e928984d6e6220fe45d8a2e824ea1bdf2feb091de"
    );
}

#[test]
fn derive_seed_is_deterministic() {
    let entropy = "5f".repeat(48);

    assert_eq!(
        derive_seed(&entropy, "649").unwrap(),
        derive_seed(&entropy, "649").unwrap()
    );
}

#[test]
fn purposes_yield_different_seeds() {
    for entropy in [zero_entropy(), "ff".repeat(32), "0123456789abcdef".repeat(4)] {
        assert_ne!(
            derive_seed(&entropy, "649").unwrap(),
            derive_seed(&entropy, "max").unwrap(),
            "entropy {entropy}"
        );
    }
}

#[test]
fn hex_is_case_insensitive() {
    let upper = derive_seed(&"AB".repeat(32), "649").unwrap();
    let lower = derive_seed(&"ab".repeat(32), "649").unwrap();

    assert_eq!(upper, lower);
    assert_eq!(
        hex::encode(upper.as_bytes()),
        "d836543014eace6ddc328f41958dbc4b6baf5824a611170d0ea0b461630d87bd"
    );
}

#[test]
fn odd_length_is_an_encoding_error() {
    let err = derive_seed("ABC", "649").unwrap_err();

    assert!(matches!(err, Error::InvalidEncoding(hex::FromHexError::OddLength)));
    assert_eq!(err.kind(), ErrorKind::Encoding);
}

#[test]
fn non_hex_character_is_an_encoding_error() {
    let err = derive_seed("zz00", "649").unwrap_err();

    assert!(matches!(
        err,
        Error::InvalidEncoding(hex::FromHexError::InvalidHexCharacter { c: 'z', index: 0 })
    ));
}

#[test]
fn short_entropy_is_accepted_by_the_core() {
    assert!(derive_seed("", "649").is_ok());
    assert!(derive_seed("01", "649").is_ok());
}

#[test]
fn entropy_derive_matches_derive_seed() {
    let hex = "c0ffee".repeat(12);
    let entropy = Entropy::from_hex(&hex).unwrap();

    assert_eq!(entropy.bits(), 288);
    assert!(entropy.require_bits(MIN_ENTROPY_BITS).is_ok());
    assert_eq!(entropy.derive("max"), derive_seed(&hex, "max").unwrap());
}

#[test]
fn entropy_from_bytes_matches_hex() {
    let bytes = [0x42u8; 32];
    let from_bytes = Entropy::from_bytes(&bytes).derive("649");
    let from_hex = Entropy::from_hex(&hex::encode(bytes)).unwrap().derive("649");

    assert_eq!(from_bytes, from_hex);
}

#[test]
fn seed_round_trips_bytes() {
    let seed = Seed::from([7u8; 32]);

    assert_eq!(seed.as_bytes(), &[7u8; 32]);
}
