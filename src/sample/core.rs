//! Fisher-Yates sampler driven by a [`StreamGenerator`].

use crate::derivation::Seed;
use crate::error::{Error, Result};
use crate::rng::StreamGenerator;

/// Default upper bound on the number of candidates held in memory (2²⁴),
/// applied by [`DrawPlan`](crate::config::DrawPlan) unless overridden.
pub const DEFAULT_MAX_POOL_LEN: usize = 1 << 24;

/// Draws `count` distinct integers from `[min, max]`.
///
/// Values live in the `u32` domain; negative bounds are not representable.
/// By default the pool is unbounded and only a failed allocation is an
/// error. [`with_max_pool_len`](Self::with_max_pool_len) opts into a hard cap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UniqueSampler {
    max_pool_len: Option<usize>,
}

impl UniqueSampler {
    /// Creates a sampler with no pool limit.
    pub fn new() -> Self {
        Self { max_pool_len: None }
    }

    /// Creates a sampler that refuses ranges with more than `max_pool_len`
    /// candidates.
    pub fn with_max_pool_len(max_pool_len: usize) -> Self {
        Self {
            max_pool_len: Some(max_pool_len),
        }
    }

    /// Maximum number of candidates this sampler will allocate, if capped.
    pub fn max_pool_len(&self) -> Option<usize> {
        self.max_pool_len
    }

    /// Shuffles the pool `[min, max]` with values drawn from `rng` and
    /// returns its first `count` elements in ascending order.
    ///
    /// Consumes exactly `max - min` words from `rng` on success and none on
    /// failure.
    ///
    /// # Errors
    /// - [`Error::InvalidBounds`] when `min > max`
    /// - [`Error::RangeTooSmall`] when `count > max - min + 1`
    /// - [`Error::PoolTooLarge`] when a cap is set and the range exceeds it
    /// - [`Error::PoolAllocation`] when memory for the pool cannot be reserved
    pub fn sample(
        &self,
        rng: &mut StreamGenerator,
        count: usize,
        min: u32,
        max: u32,
    ) -> Result<Vec<u32>> {
        let available = self.check(count, min, max)?;

        let mut pool = Self::allocate_pool(available)?;
        pool.extend(min..=max);

        // Full Fisher-Yates: i from len-1 down to 1, j uniform in [0, i].
        for i in (1..pool.len()).rev() {
            let j = (rng.next_f64() * (i + 1) as f64).floor() as usize;
            pool.swap(i, j);
        }

        pool.truncate(count);
        pool.sort_unstable();

        tracing::debug!(count, min, max, draws = available - 1, "sampled unique set");

        Ok(pool)
    }

    /// Validates the request and returns the pool length.
    fn check(&self, count: usize, min: u32, max: u32) -> Result<u64> {
        if min > max {
            return Err(Error::InvalidBounds { min, max });
        }

        let available = u64::from(max - min) + 1;

        if count as u64 > available {
            return Err(Error::RangeTooSmall { count, available });
        }

        if let Some(limit) = self.max_pool_len {
            if available > limit as u64 {
                return Err(Error::PoolTooLarge {
                    len: available,
                    limit,
                });
            }
        }

        Ok(available)
    }

    fn allocate_pool(len: u64) -> Result<Vec<u32>> {
        let mut pool = Vec::new();

        usize::try_from(len)
            .ok()
            .and_then(|n| pool.try_reserve_exact(n).ok())
            .ok_or(Error::PoolAllocation { len })?;

        Ok(pool)
    }
}

impl Default for UniqueSampler {
    fn default() -> Self {
        Self::new()
    }
}

/// Draws `count` distinct integers from `[min, max]` using a fresh generator
/// seeded with `seed`, in ascending order.
///
/// No pool cap is applied: any range that fits in memory is sampled.
pub fn sample(seed: &Seed, count: usize, min: u32, max: u32) -> Result<Vec<u32>> {
    let mut rng = StreamGenerator::new(seed);

    UniqueSampler::new().sample(&mut rng, count, min, max)
}
