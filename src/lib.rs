//! Deterministic number draws from public beacon entropy
//!
//! This crate turns a single published entropy value (for example the
//! output of a public randomness beacon) into one or more independent sets
//! of unique integers drawn uniformly from a bounded range.
//!
//! The focus is on **reproducibility and auditability**: the same entropy
//! and purpose label always yield the same numbers, every primitive is
//! implemented in plain Rust with exact 32-bit arithmetic, and nothing
//! depends on ambient state.
//!
//! # Pipeline
//!
//! ```text
//! entropy hex ─▶ derivation (HMAC-SHA256, keyed by purpose) ─▶ Seed
//!             ─▶ rng (ChaCha20 counter-mode stream)       ─▶ uniform words
//!             ─▶ sample (full Fisher-Yates, sorted prefix) ─▶ number set
//!             ─▶ validate                                  ─▶ caller
//! ```
//!
//! # Module overview
//!
//! - `hash`
//!   SHA-256, used as the compression primitive for HMAC.
//!
//! - `mac`
//!   HMAC-SHA256 (RFC 2104).
//!
//! - `derivation`
//!   Entropy decoding and purpose-keyed seed derivation. Distinct purpose
//!   labels over the same entropy give computationally independent seeds.
//!
//! - `rng`
//!   A ChaCha20-based keystream generator expanding one seed into an
//!   unbounded stream of uniform 32-bit words.
//!
//! - `sample`
//!   Unbiased selection of unique integers from `[min, max]`.
//!
//! - `validate`
//!   Structural check of a generated set (count, uniqueness, range).
//!
//! - `config` / `draw`
//!   Draw plans and the end-to-end entry points [`generate_set`] and
//!   [`generate_plan`].
//!
//! # Example
//!
//! ```
//! let entropy = "00".repeat(32);
//! let numbers = beacon_draw::generate_set(&entropy, "649", 6, 1, 49).unwrap();
//!
//! assert_eq!(numbers, vec![14, 20, 24, 27, 31, 41]);
//! assert!(beacon_draw::validate(&numbers, 6, 1, 49));
//! ```
//!
//! Fetching the entropy and presenting the results are left to the caller.
//! This crate is not a general-purpose cryptographic library.

pub mod config;
pub mod derivation;
pub mod draw;
pub mod error;
pub mod hash;
pub mod mac;
pub mod rng;
pub mod sample;
pub mod validate;

pub use config::{DrawConfig, DrawPlan};
pub use derivation::{Entropy, Seed, derive_seed};
pub use draw::{DrawResult, generate_plan, generate_set};
pub use error::{Error, ErrorKind, Result};
pub use rng::StreamGenerator;
pub use sample::{UniqueSampler, sample};
pub use validate::validate;
