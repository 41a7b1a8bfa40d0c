//! Error types for the draw pipeline.
//!
//! Every fallible operation in the crate reports through [`Error`]. Failures
//! are returned to the immediate caller and never retried internally; a
//! failed call produces no partial output.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while deriving seeds or generating number sets.
#[derive(Debug, Error)]
pub enum Error {
    /// The entropy string is not valid hexadecimal (odd length or a
    /// non-hex character).
    #[error("invalid entropy encoding: {0}")]
    InvalidEncoding(#[from] hex::FromHexError),

    /// The decoded entropy is shorter than the caller-required minimum.
    #[error("insufficient entropy: got {bits} bits, need at least {required}")]
    InsufficientEntropy {
        /// Bits of entropy supplied.
        bits: usize,
        /// Bits of entropy required.
        required: usize,
    },

    /// The lower bound is greater than the upper bound.
    #[error("invalid bounds: min {min} is greater than max {max}")]
    InvalidBounds {
        /// Requested lower bound.
        min: u32,
        /// Requested upper bound.
        max: u32,
    },

    /// More values were requested than the range contains.
    #[error("range too small: requested {count} values but only {available} are available")]
    RangeTooSmall {
        /// Requested number of values.
        count: usize,
        /// Number of integers in `[min, max]`.
        available: u64,
    },

    /// The candidate pool would exceed the sampler's allocation limit.
    #[error("pool of {len} candidates exceeds the limit of {limit}")]
    PoolTooLarge {
        /// Number of integers in `[min, max]`.
        len: u64,
        /// Configured maximum pool length.
        limit: usize,
    },

    /// Memory for the candidate pool could not be reserved.
    #[error("could not allocate a pool of {len} candidates")]
    PoolAllocation {
        /// Number of integers in `[min, max]`.
        len: u64,
    },

    /// A generated set failed its post-generation sanity check.
    ///
    /// This is an internal invariant violation, not a user error.
    #[error("generated set for purpose {purpose:?} failed validation")]
    ValidationFailure {
        /// Purpose label of the failed draw.
        purpose: String,
    },

    /// A draw plan is structurally invalid.
    #[error("invalid draw plan: {0}")]
    InvalidPlan(String),

    /// A draw plan could not be parsed.
    #[error("failed to parse draw plan: {0}")]
    Config(#[from] serde_json::Error),
}

/// Coarse classification of [`Error`] values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or insufficient entropy input.
    Encoding,
    /// Bounds, count or pool size cannot be satisfied.
    Range,
    /// Post-generation sanity check failed.
    Validation,
    /// Draw plan could not be loaded or is inconsistent.
    Config,
}

impl Error {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidEncoding(_) | Error::InsufficientEntropy { .. } => ErrorKind::Encoding,
            Error::InvalidBounds { .. }
            | Error::RangeTooSmall { .. }
            | Error::PoolTooLarge { .. }
            | Error::PoolAllocation { .. } => ErrorKind::Range,
            Error::ValidationFailure { .. } => ErrorKind::Validation,
            Error::InvalidPlan(_) | Error::Config(_) => ErrorKind::Config,
        }
    }
}
