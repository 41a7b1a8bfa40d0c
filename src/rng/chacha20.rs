//! ChaCha20 block function
//!
//! The 20-round ChaCha permutation and its feed-forward, operating directly
//! on a 16-word state. Callers decide how that state is laid out; the
//! permutation itself is layout-agnostic.
//!
//! Only the keystream is ever consumed. Nothing here encrypts or decrypts.

/// ChaCha20 constant words.
///
/// These values correspond to the ASCII string `"expand 32-byte k"` encoded
/// as little-endian `u32` words.
pub(crate) const CHACHA20_CONSTANTS: [u32; 4] = [
    0x6170_7865, // "expa"
    0x3320_646e, // "nd 3"
    0x7962_2d32, // "2-by"
    0x6b20_6574, // "te k"
];

/// Number of 32-bit words in a state or output block.
pub(crate) const STATE_WORDS: usize = 16;

/// Performs one ChaCha20 quarter round.
///
/// Mixes four words of the state using addition modulo 2³², XOR and fixed
/// left rotations of 16, 12, 8 and 7 bits.
#[inline(always)]
fn quarter_round(state: &mut [u32; STATE_WORDS], a: usize, b: usize, c: usize, d: usize) {
    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(16);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(12);

    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(8);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(7);
}

/// Applies the full ChaCha20 permutation (10 double rounds).
///
/// Each double round is one column pass followed by one diagonal pass.
fn rounds(state: &mut [u32; STATE_WORDS]) {
    for _ in 0..10 {
        // Column rounds
        quarter_round(state, 0, 4, 8, 12);
        quarter_round(state, 1, 5, 9, 13);
        quarter_round(state, 2, 6, 10, 14);
        quarter_round(state, 3, 7, 11, 15);

        // Diagonal rounds
        quarter_round(state, 0, 5, 10, 15);
        quarter_round(state, 1, 6, 11, 12);
        quarter_round(state, 2, 7, 8, 13);
        quarter_round(state, 3, 4, 9, 14);
    }
}

/// Produces one output block from `input`.
///
/// The input is permuted in a working copy and then added back word by word
/// (mod 2³²). `input` is left untouched.
pub(crate) fn block(input: &[u32; STATE_WORDS]) -> [u32; STATE_WORDS] {
    let mut working = *input;

    rounds(&mut working);

    working
        .iter_mut()
        .zip(input)
        .for_each(|(w, o)| *w = w.wrapping_add(*o));

    working
}
