//! Space-optimised dynamic programming for the 0/1 knapsack problem.
//!
//! A single table `dp` of `capacity + 1` cells is folded over the items in
//! order. Before item `i` is folded in, `dp[j]` is the best value reachable
//! with items `0..i` and total weight at most `j`.
//!
//! Time is `O(n * capacity)`, space is `O(capacity)`. Every call owns its own
//! table, so concurrent callers never share state.

use crate::SolverConfig;
use knap_challenges::{knapsack::Challenge, KnapsackError};
use tracing::debug;

/// Best total value packable within `capacity`, each item used at most once.
///
/// Returns 0 straight away when either list is empty or `capacity <= 0`.
/// Otherwise mismatched lengths, negative entries and oversized capacities
/// are rejected before any work.
pub fn solve(weights: &[i64], values: &[i64], capacity: i64) -> Result<u64, KnapsackError> {
    solve_with_config(weights, values, capacity, &SolverConfig::default())
}

pub fn solve_with_config(
    weights: &[i64],
    values: &[i64],
    capacity: i64,
    config: &SolverConfig,
) -> Result<u64, KnapsackError> {
    if weights.is_empty() || values.is_empty() || capacity <= 0 {
        debug!(
            num_weights = weights.len(),
            num_values = values.len(),
            capacity,
            "nothing to pack"
        );
        return Ok(0);
    }
    let challenge = Challenge::new(weights.to_vec(), values.to_vec(), capacity)?;
    solve_challenge(&challenge, config)
}

pub fn solve_challenge(challenge: &Challenge, config: &SolverConfig) -> Result<u64, KnapsackError> {
    if challenge.is_trivial() {
        debug!(
            num_items = challenge.num_items(),
            capacity = challenge.capacity(),
            "nothing to pack"
        );
        return Ok(0);
    }

    let capacity = challenge.capacity();
    if capacity > config.max_capacity {
        return Err(KnapsackError::CapacityOverflow {
            capacity,
            max_capacity: config.max_capacity,
        });
    }

    let mut dp = allocate_table(capacity)?;
    for (&weight, &value) in challenge.weights().iter().zip(challenge.values()) {
        fold_item(&mut dp, weight, value);
    }

    let best = dp[dp.len() - 1];
    debug!(
        num_items = challenge.num_items(),
        capacity,
        value = best,
        "solved"
    );
    Ok(best)
}

fn allocate_table(capacity: u64) -> Result<Vec<u64>, KnapsackError> {
    let cells = capacity.saturating_add(1);
    let len = usize::try_from(cells).map_err(|_| KnapsackError::Allocation { cells })?;
    let mut dp = Vec::new();
    dp.try_reserve_exact(len)
        .map_err(|_| KnapsackError::Allocation { cells })?;
    dp.resize(len, 0);
    Ok(dp)
}

/// Folds one item into the table.
///
/// `j` runs from the top down so `dp[j - weight]` still excludes this item
/// when it is read. Running upwards would let the item be packed twice.
/// Cells below `weight` are left alone.
fn fold_item(dp: &mut [u64], weight: u64, value: u64) {
    let capacity = dp.len() - 1;
    let weight = match usize::try_from(weight) {
        Ok(w) if w <= capacity => w,
        _ => return,
    };
    for j in (weight..=capacity).rev() {
        // Cannot overflow: the total of all values fits in u64.
        let candidate = dp[j - weight] + value;
        if candidate > dp[j] {
            dp[j] = candidate;
        }
    }
}
