//! Deterministic random stream generation.
//!
//! A [`StreamGenerator`] expands one 256-bit [`Seed`](crate::derivation::Seed)
//! into an effectively unbounded sequence of uniform 32-bit words using the
//! ChaCha20 block function in counter mode.
//!
//! Design goals:
//! - Bit-exact, reproducible output for a given seed
//! - One private generator per derived seed, no global instance
//! - No heap allocation
pub(crate) mod chacha20;
mod stream;

pub use stream::StreamGenerator;
