//! Structural sanity check for generated number sets.

use std::collections::HashSet;

/// Checks that `numbers` holds exactly `expected_count` distinct values,
/// all within `[min, max]`.
///
/// Checks run in that order and stop at the first violation. Never panics
/// and never mutates its input.
pub fn validate(numbers: &[u32], expected_count: usize, min: u32, max: u32) -> bool {
    if numbers.len() != expected_count {
        return false;
    }

    let distinct: HashSet<u32> = numbers.iter().copied().collect();
    if distinct.len() != numbers.len() {
        return false;
    }

    numbers.iter().all(|n| (min..=max).contains(n))
}
