//! Seed derivation from public beacon entropy.
//!
//! A single entropy value is shared by every draw. Each draw is keyed by a
//! purpose label, and HMAC-SHA256 over that label yields a seed that is
//! computationally independent of the seeds of every other label.

mod seed;

pub use seed::{Entropy, MIN_ENTROPY_BITS, Seed, SEED_LEN, derive_seed};
