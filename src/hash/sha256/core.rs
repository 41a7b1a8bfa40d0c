//! SHA-256 core hashing functions
//!
//! This module implements the SHA-256 hash function as defined in FIPS 180-4.
//!
//! It provides:
//! - the compression function operating on 512-bit blocks
//! - a streaming [`Sha256`] hasher for inputs assembled from several parts
//! - a one-shot [`sha256`] convenience function

use super::computations::all_rounds;
use super::{BLOCK_LEN, DIGEST_LEN, H256_INIT};

/// Compresses a single 512-bit message block into `state`.
///
/// Input words are interpreted as big-endian, as required by SHA-256.
#[inline(always)]
pub fn compress(block: &[u8; BLOCK_LEN], state: &mut [u32; 8]) {
    let mut w = [0u32; 16];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    all_rounds(state, w);
}

/// Incremental SHA-256 hasher.
///
/// Data may be fed in any number of [`update`](Sha256::update) calls; the
/// digest only depends on the concatenation of everything fed.
#[derive(Clone)]
pub struct Sha256 {
    state: [u32; 8],
    buffer: [u8; BLOCK_LEN],
    buffered: usize,
    length: u64,
}

impl Sha256 {
    /// Creates a hasher in the initial state.
    pub fn new() -> Self {
        Self {
            state: H256_INIT,
            buffer: [0u8; BLOCK_LEN],
            buffered: 0,
            length: 0,
        }
    }

    /// Absorbs `input` into the hash state.
    pub fn update(&mut self, mut input: &[u8]) {
        self.length = self.length.wrapping_add(input.len() as u64);

        if self.buffered > 0 {
            let take = (BLOCK_LEN - self.buffered).min(input.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&input[..take]);
            self.buffered += take;
            input = &input[take..];

            if self.buffered < BLOCK_LEN {
                return;
            }

            compress(&self.buffer, &mut self.state);
            self.buffered = 0;
        }

        let mut blocks = input.chunks_exact(BLOCK_LEN);
        for chunk in &mut blocks {
            if let Ok(block) = <&[u8; BLOCK_LEN]>::try_from(chunk) {
                compress(block, &mut self.state);
            }
        }

        let rem = blocks.remainder();
        self.buffer[..rem.len()].copy_from_slice(rem);
        self.buffered = rem.len();
    }

    /// Applies padding and returns the 32-byte digest.
    pub fn finalize(mut self) -> [u8; DIGEST_LEN] {
        let bit_len = self.length.wrapping_shl(3);

        let mut block = [0u8; BLOCK_LEN];
        let rem = self.buffered;

        block[..rem].copy_from_slice(&self.buffer[..rem]);
        block[rem] = 0x80;

        if rem > 55 {
            compress(&block, &mut self.state);
            block = [0u8; BLOCK_LEN];
        }

        block[56..].copy_from_slice(&bit_len.to_be_bytes());
        compress(&block, &mut self.state);

        let mut out = [0u8; DIGEST_LEN];
        out.chunks_exact_mut(4)
            .zip(&self.state)
            .for_each(|(c, w)| c.copy_from_slice(&w.to_be_bytes()));

        out
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the SHA-256 digest of `input` in one call.
pub fn sha256(input: &[u8]) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(input);
    hasher.finalize()
}
