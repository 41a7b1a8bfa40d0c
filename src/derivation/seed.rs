//! Entropy decoding and purpose-keyed seed derivation.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};
use crate::mac::hmac_sha256;

/// Length of a derived seed in bytes.
pub const SEED_LEN: usize = 32;

/// Recommended minimum entropy, in bits, for the independence guarantee of
/// derived seeds to hold (64 hex characters).
///
/// Neither [`derive_seed`] nor [`Entropy::from_hex`] enforce it; callers opt
/// in through [`Entropy::require_bits`].
pub const MIN_ENTROPY_BITS: usize = 256;

/// Decoded entropy bytes.
///
/// Treated as opaque key material: it is never mutated after decoding and is
/// wiped when dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Entropy {
    bytes: Vec<u8>,
}

impl Entropy {
    /// Decodes a hexadecimal entropy string.
    ///
    /// Upper- and lower-case digits are accepted. Odd-length input or any
    /// non-hex character yields [`Error::InvalidEncoding`].
    pub fn from_hex(entropy_hex: &str) -> Result<Self> {
        let bytes = hex::decode(entropy_hex)?;

        Ok(Self { bytes })
    }

    /// Wraps already-decoded entropy bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }

    /// Number of entropy bits supplied.
    pub fn bits(&self) -> usize {
        self.bytes.len() * 8
    }

    /// Fails with [`Error::InsufficientEntropy`] when fewer than `required`
    /// bits were supplied.
    pub fn require_bits(&self, required: usize) -> Result<&Self> {
        let bits = self.bits();

        if bits < required {
            return Err(Error::InsufficientEntropy { bits, required });
        }

        Ok(self)
    }

    /// Derives the seed for `purpose`: `HMAC-SHA256(key = entropy, message = purpose)`.
    ///
    /// Pure function of `(entropy, purpose)`; equal inputs always produce a
    /// byte-identical seed.
    pub fn derive(&self, purpose: &str) -> Seed {
        tracing::debug!(purpose, entropy_bits = self.bits(), "deriving seed");

        Seed(hmac_sha256(&self.bytes, purpose.as_bytes()))
    }
}

impl fmt::Debug for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entropy")
            .field("bits", &self.bits())
            .finish_non_exhaustive()
    }
}

/// 256-bit secret seed for a single [`StreamGenerator`](crate::rng::StreamGenerator).
///
/// Wiped on drop. The `Debug` output never includes the seed bytes.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; SEED_LEN]);

impl Seed {
    /// Borrows the raw seed bytes.
    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }
}

impl From<[u8; SEED_LEN]> for Seed {
    fn from(bytes: [u8; SEED_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(<redacted>)")
    }
}

/// Decodes `entropy_hex` and derives the seed for `purpose`.
///
/// # Errors
/// [`Error::InvalidEncoding`] when `entropy_hex` is not valid hexadecimal.
/// The derivation itself never fails.
pub fn derive_seed(entropy_hex: &str, purpose: &str) -> Result<Seed> {
    let entropy = Entropy::from_hex(entropy_hex)?;

    Ok(entropy.derive(purpose))
}
