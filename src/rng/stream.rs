//! Counter-mode keystream generator.
//!
//! State layout (16 words):
//!
//! | words  | contents                              |
//! |--------|---------------------------------------|
//! | 0..8   | seed, little-endian                   |
//! | 8..12  | `"expand 32-byte k"` constants        |
//! | 12..16 | 128-bit block counter, low word first |
//!
//! Output words are served one at a time from a 16-word buffer that is
//! refilled with a fresh block whenever it runs out.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::derivation::Seed;
use crate::rng::chacha20::{CHACHA20_CONSTANTS, STATE_WORDS, block};

const COUNTER_WORD: usize = 12;

/// 2³² as a float, used to map a word into `[0, 1)`.
const WORD_RANGE: f64 = 4_294_967_296.0;

/// Stateful keystream generator seeded from a single [`Seed`].
///
/// Two generators built from the same seed produce byte-identical streams.
/// A generator is owned by exactly one draw; it is deliberately not `Clone`.
/// Its state is wiped on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct StreamGenerator {
    state: [u32; STATE_WORDS],
    buffer: [u32; STATE_WORDS],
    cursor: usize,
}

impl StreamGenerator {
    /// Creates a generator with a zero counter and an empty output buffer.
    pub fn new(seed: &Seed) -> Self {
        let mut state = [0u32; STATE_WORDS];

        state[..8]
            .iter_mut()
            .zip(seed.as_bytes().chunks_exact(4))
            .for_each(|(s, k)| *s = u32::from_le_bytes([k[0], k[1], k[2], k[3]]));

        state[8..COUNTER_WORD].copy_from_slice(&CHACHA20_CONSTANTS);

        Self {
            state,
            buffer: [0u32; STATE_WORDS],
            // Past the end: the first read generates a block.
            cursor: STATE_WORDS,
        }
    }

    /// Returns the next uniformly distributed 32-bit word.
    pub fn next_u32(&mut self) -> u32 {
        if self.cursor >= STATE_WORDS {
            self.refill();
        }

        let word = self.buffer[self.cursor];
        self.cursor += 1;

        word
    }

    /// Returns the next value in `[0, 1)`, computed as `next_u32() / 2³²`.
    ///
    /// The division is exact, so every implementation following the same
    /// stream agrees on the result bit for bit.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / WORD_RANGE
    }

    /// Number of blocks generated so far (the current counter value).
    #[cfg(test)]
    pub(crate) fn blocks_generated(&self) -> u128 {
        self.state[COUNTER_WORD..]
            .iter()
            .rev()
            .fold(0u128, |acc, &w| (acc << 32) | u128::from(w))
    }

    /// Generates the next block into the output buffer and advances the
    /// counter.
    fn refill(&mut self) {
        self.buffer = block(&self.state);
        self.cursor = 0;
        self.advance_counter();
    }

    /// Increments the low counter word, carrying into the next word on wrap.
    ///
    /// The carry stops at word 13: 2⁶⁴ blocks is far beyond any draw.
    fn advance_counter(&mut self) {
        let low = self.state[COUNTER_WORD].wrapping_add(1);
        self.state[COUNTER_WORD] = low;

        if low == 0 {
            self.state[COUNTER_WORD + 1] = self.state[COUNTER_WORD + 1].wrapping_add(1);
        }
    }
}
