//! HMAC-SHA256 (RFC 2104).
//!
//! `H((K ^ opad) || H((K ^ ipad) || message))`, where `K` is the key
//! zero-padded to the 64-byte block size, or hashed first when longer.

use zeroize::Zeroize;

use crate::hash::sha256::{BLOCK_LEN, DIGEST_LEN};
use crate::hash::{Sha256, sha256};

/// Length of an HMAC-SHA256 tag in bytes.
pub const HMAC_SHA256_LEN: usize = DIGEST_LEN;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// Computes HMAC-SHA256 of `message` under `key`.
///
/// Any key length is accepted, including zero. Keys longer than the block
/// size are replaced by their SHA-256 digest as the RFC requires.
pub fn hmac_sha256(key: &[u8], message: &[u8]) -> [u8; HMAC_SHA256_LEN] {
    let mut key_block = [0u8; BLOCK_LEN];

    if key.len() > BLOCK_LEN {
        let mut digest = sha256(key);
        key_block[..DIGEST_LEN].copy_from_slice(&digest);
        digest.zeroize();
    } else {
        key_block[..key.len()].copy_from_slice(key);
    }

    let mut pad = [0u8; BLOCK_LEN];

    pad.iter_mut()
        .zip(&key_block)
        .for_each(|(p, k)| *p = k ^ IPAD);

    let mut inner = Sha256::new();
    inner.update(&pad);
    inner.update(message);
    let mut inner_hash = inner.finalize();

    pad.iter_mut()
        .zip(&key_block)
        .for_each(|(p, k)| *p = k ^ OPAD);

    let mut outer = Sha256::new();
    outer.update(&pad);
    outer.update(&inner_hash);

    key_block.zeroize();
    pad.zeroize();
    inner_hash.zeroize();

    outer.finalize()
}
