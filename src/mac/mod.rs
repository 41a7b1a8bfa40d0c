//! Message authentication codes.
//!
//! Only HMAC-SHA256 is provided. It is used as the keyed derivation
//! function that turns shared entropy into per-purpose seeds.

mod hmac;

pub use hmac::{HMAC_SHA256_LEN, hmac_sha256};
