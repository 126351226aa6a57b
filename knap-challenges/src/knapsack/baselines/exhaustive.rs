use crate::knapsack::{Challenge, Selection, MAX_EXHAUSTIVE_ITEMS};
use crate::KnapsackError;

/// Enumerates every subset and keeps the most valuable one that fits.
/// Ties go to the subset with the smallest bitmask.
pub fn solve_challenge(challenge: &Challenge) -> Result<Selection, KnapsackError> {
    // Zero capacity packs nothing, zero-weight items included.
    if challenge.is_trivial() {
        return Ok(Selection::new());
    }
    let num_items = challenge.num_items();
    if num_items > MAX_EXHAUSTIVE_ITEMS {
        return Err(KnapsackError::TooManyItems {
            num_items,
            max: MAX_EXHAUSTIVE_ITEMS,
        });
    }
    let weights = challenge.weights();
    let values = challenge.values();
    let capacity = challenge.capacity() as u128;

    let mut best_mask = 0u32;
    let mut best_value = 0u128;
    for mask in 0u32..(1u32 << num_items) {
        let mut total_weight = 0u128;
        let mut total_value = 0u128;
        for i in 0..num_items {
            if mask & (1 << i) != 0 {
                total_weight += weights[i] as u128;
                total_value += values[i] as u128;
            }
        }
        if total_weight <= capacity && total_value > best_value {
            best_value = total_value;
            best_mask = mask;
        }
    }

    let items = (0..num_items)
        .filter(|&i| best_mask & (1 << i) != 0)
        .collect();
    Ok(Selection { items })
}
