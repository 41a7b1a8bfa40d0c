//! Unbiased selection of unique integers.
//!
//! The whole candidate pool is shuffled with Fisher-Yates before a prefix is
//! taken, so every `count`-subset of `[min, max]` is equally likely.

mod core;

pub use self::core::{DEFAULT_MAX_POOL_LEN, UniqueSampler, sample};
