//! Draw configuration.
//!
//! A [`DrawPlan`] lists the independent draws produced from one entropy
//! value. Plans can be built in code, taken from [`DrawPlan::default`], or
//! loaded from JSON:
//!
//! ```json
//! {
//!   "draws": [
//!     { "purpose": "649", "count": 6, "min": 1, "max": 49 },
//!     { "purpose": "max", "count": 7, "min": 1, "max": 50 }
//!   ],
//!   "min_entropy_bits": 256
//! }
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::derivation::MIN_ENTROPY_BITS;
use crate::error::{Error, Result};
use crate::sample::DEFAULT_MAX_POOL_LEN;

/// Parameters of a single draw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawConfig {
    /// Purpose label keying the seed derivation.
    pub purpose: String,
    /// Number of distinct values to draw.
    pub count: usize,
    /// Inclusive lower bound.
    pub min: u32,
    /// Inclusive upper bound.
    pub max: u32,
}

impl DrawConfig {
    /// Creates a draw configuration.
    pub fn new(purpose: impl Into<String>, count: usize, min: u32, max: u32) -> Self {
        Self {
            purpose: purpose.into(),
            count,
            min,
            max,
        }
    }

    /// Lotto 6/49: six numbers from 1 to 49, purpose `"649"`.
    pub fn lotto_649() -> Self {
        Self::new("649", 6, 1, 49)
    }

    /// Lotto Max: seven numbers from 1 to 50, purpose `"max"`.
    pub fn lotto_max() -> Self {
        Self::new("max", 7, 1, 50)
    }
}

fn default_max_pool_len() -> usize {
    DEFAULT_MAX_POOL_LEN
}

/// Set of draws generated together from one entropy value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawPlan {
    /// Draws to generate, in output order.
    pub draws: Vec<DrawConfig>,

    /// Minimum entropy, in bits, required before any draw is generated.
    /// `None` trusts the caller.
    #[serde(default)]
    pub min_entropy_bits: Option<usize>,

    /// Maximum candidate pool length per draw.
    #[serde(default = "default_max_pool_len")]
    pub max_pool_len: usize,
}

impl DrawPlan {
    /// Creates a plan with no entropy requirement and the default pool limit.
    pub fn new(draws: Vec<DrawConfig>) -> Self {
        Self {
            draws,
            min_entropy_bits: None,
            max_pool_len: DEFAULT_MAX_POOL_LEN,
        }
    }

    /// Parses a plan from JSON and validates it.
    pub fn from_json(json: &str) -> Result<Self> {
        let plan: Self = serde_json::from_str(json)?;
        plan.validate()?;

        Ok(plan)
    }

    /// Checks that the plan is internally consistent.
    ///
    /// Rejects an empty plan, empty or duplicate purposes, inverted bounds
    /// and draws asking for more values than their range holds.
    pub fn validate(&self) -> Result<()> {
        if self.draws.is_empty() {
            return Err(Error::InvalidPlan("plan contains no draws".into()));
        }

        let mut seen = HashSet::new();

        for draw in &self.draws {
            if draw.purpose.is_empty() {
                return Err(Error::InvalidPlan("draw purpose must not be empty".into()));
            }

            if !seen.insert(draw.purpose.as_str()) {
                return Err(Error::InvalidPlan(format!(
                    "duplicate purpose {:?}",
                    draw.purpose
                )));
            }

            if draw.min > draw.max {
                return Err(Error::InvalidPlan(format!(
                    "draw {:?}: min {} is greater than max {}",
                    draw.purpose, draw.min, draw.max
                )));
            }

            let available = u64::from(draw.max - draw.min) + 1;
            if draw.count as u64 > available {
                return Err(Error::InvalidPlan(format!(
                    "draw {:?}: {} values requested from a range of {}",
                    draw.purpose, draw.count, available
                )));
            }
        }

        Ok(())
    }
}

impl Default for DrawPlan {
    /// Lotto 6/49 and Lotto Max, requiring 256 bits of entropy.
    fn default() -> Self {
        Self {
            draws: vec![DrawConfig::lotto_649(), DrawConfig::lotto_max()],
            min_entropy_bits: Some(MIN_ENTROPY_BITS),
            max_pool_len: DEFAULT_MAX_POOL_LEN,
        }
    }
}
