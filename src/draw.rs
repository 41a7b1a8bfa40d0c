//! End-to-end generation: entropy string in, validated number sets out.

use serde::Serialize;

use crate::config::DrawPlan;
use crate::derivation::Entropy;
use crate::error::{Error, Result};
use crate::rng::StreamGenerator;
use crate::sample::UniqueSampler;
use crate::validate::validate;

/// One generated set, tagged with the purpose it was derived for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DrawResult {
    /// Purpose label the set was derived under.
    pub purpose: String,
    /// Distinct values in ascending order.
    pub numbers: Vec<u32>,
}

/// Generates `count` distinct integers from `[min, max]` for `purpose`.
///
/// Decodes the entropy, derives the purpose seed, samples, and validates the
/// result before returning it. The same arguments always produce the same
/// set.
///
/// Bounds are inclusive `u32` values, so only non-negative ranges can be
/// expressed. The candidate pool is not capped; use [`generate_plan`] with
/// [`DrawPlan::max_pool_len`] to bound memory.
///
/// # Errors
/// - [`Error::InvalidEncoding`] for malformed hex
/// - [`Error::InvalidBounds`] or [`Error::RangeTooSmall`] when the range
///   cannot satisfy the request
/// - [`Error::PoolAllocation`] if memory for the pool cannot be reserved
/// - [`Error::ValidationFailure`] if the sanity check rejects the output
pub fn generate_set(
    entropy_hex: &str,
    purpose: &str,
    count: usize,
    min: u32,
    max: u32,
) -> Result<Vec<u32>> {
    let entropy = Entropy::from_hex(entropy_hex)?;

    draw_one(&entropy, &UniqueSampler::new(), purpose, count, min, max)
}

/// Generates every draw in `plan` from the same entropy value.
///
/// Each draw uses its own purpose-derived generator, so the sets are
/// independent of one another and of their order in the plan. Either all
/// draws succeed or an error is returned.
pub fn generate_plan(entropy_hex: &str, plan: &DrawPlan) -> Result<Vec<DrawResult>> {
    plan.validate()?;

    let entropy = Entropy::from_hex(entropy_hex)?;
    if let Some(required) = plan.min_entropy_bits {
        entropy.require_bits(required)?;
    }

    let sampler = UniqueSampler::with_max_pool_len(plan.max_pool_len);

    let results = plan
        .draws
        .iter()
        .map(|draw| {
            draw_one(&entropy, &sampler, &draw.purpose, draw.count, draw.min, draw.max).map(
                |numbers| DrawResult {
                    purpose: draw.purpose.clone(),
                    numbers,
                },
            )
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::info!(draws = results.len(), "generated draw plan");

    Ok(results)
}

fn draw_one(
    entropy: &Entropy,
    sampler: &UniqueSampler,
    purpose: &str,
    count: usize,
    min: u32,
    max: u32,
) -> Result<Vec<u32>> {
    let seed = entropy.derive(purpose);
    let mut rng = StreamGenerator::new(&seed);

    let numbers = sampler.sample(&mut rng, count, min, max)?;

    if !validate(&numbers, count, min, max) {
        tracing::error!(purpose, count, min, max, "generated set failed validation");
        return Err(Error::ValidationFailure {
            purpose: purpose.to_owned(),
        });
    }

    Ok(numbers)
}
