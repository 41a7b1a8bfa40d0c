//! Hash algorithms exposed by the crate.
//!
//! Currently includes SHA-256 with a pure-Rust implementation, used as the
//! compression primitive underneath HMAC seed derivation.

pub mod sha256;

/// Re-export of the SHA-256 convenience function and streaming hasher.
pub use sha256::core::{Sha256, sha256};
