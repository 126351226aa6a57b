mod baselines;
mod track;
pub use track::Track;

use crate::KnapsackError;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Largest item count the exhaustive baseline will enumerate (2^n subsets).
pub const MAX_EXHAUSTIVE_ITEMS: usize = 20;

/// An instance as supplied by callers. Fields are signed so that negative
/// inputs reach validation instead of failing deserialization.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub weights: Vec<i64>,
    pub values: Vec<i64>,
    pub capacity: i64,
}

/// Indices of the items a caller claims to pack.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub items: Vec<usize>,
}

impl Selection {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

/// A validated item set and capacity.
///
/// Construction guarantees equal-length weights and values, no negative
/// entries, and a total value that fits in `u64`. The last property means no
/// partial sum of values can overflow either.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "Instance", into = "Instance")]
pub struct Challenge {
    num_items: usize,
    weights: Vec<u64>,
    values: Vec<u64>,
    capacity: u64,
}

impl Challenge {
    /// Validates signed inputs. A capacity of zero or below is clamped to 0.
    ///
    /// When either list is empty or `capacity <= 0` nothing can be packed, so
    /// the input is never rejected: if it does not validate it becomes an
    /// instance with no items.
    pub fn new(weights: Vec<i64>, values: Vec<i64>, capacity: i64) -> Result<Self, KnapsackError> {
        let trivial = weights.is_empty() || values.is_empty() || capacity <= 0;
        match Self::validate(weights, values, capacity) {
            Err(_) if trivial => Ok(Self {
                num_items: 0,
                weights: Vec::new(),
                values: Vec::new(),
                capacity: capacity.max(0) as u64,
            }),
            result => result,
        }
    }

    fn validate(weights: Vec<i64>, values: Vec<i64>, capacity: i64) -> Result<Self, KnapsackError> {
        if weights.len() != values.len() {
            return Err(KnapsackError::LengthMismatch {
                weights: weights.len(),
                values: values.len(),
            });
        }
        let weights = weights
            .into_iter()
            .enumerate()
            .map(|(index, weight)| {
                u64::try_from(weight).map_err(|_| KnapsackError::NegativeWeight { index, weight })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let values = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                u64::try_from(value).map_err(|_| KnapsackError::NegativeValue { index, value })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_parts(weights, values, capacity.max(0) as u64)
    }

    pub(crate) fn from_parts(
        weights: Vec<u64>,
        values: Vec<u64>,
        capacity: u64,
    ) -> Result<Self, KnapsackError> {
        if weights.len() != values.len() {
            return Err(KnapsackError::LengthMismatch {
                weights: weights.len(),
                values: values.len(),
            });
        }
        values
            .iter()
            .try_fold(0u64, |acc, &v| acc.checked_add(v))
            .ok_or(KnapsackError::ValueOverflow)?;
        Ok(Self {
            num_items: weights.len(),
            weights,
            values,
            capacity,
        })
    }

    pub fn generate_instance(seed: &[u8; 32], track: &Track) -> Result<Self, KnapsackError> {
        track.validate()?;
        let mut rng = SmallRng::from_seed(*seed);

        // Weights in [1, max_weight]
        let weights: Vec<u64> = (0..track.n_items)
            .map(|_| rng.gen_range(1..=track.max_weight as u64))
            .collect();

        // Values in [0, max_value]
        let values: Vec<u64> = (0..track.n_items)
            .map(|_| rng.gen_range(0..=track.max_value as u64))
            .collect();

        let capacity = budget_capacity(&weights, track.budget)?;
        Self::from_parts(weights, values, capacity)
    }

    pub fn num_items(&self) -> usize {
        self.num_items
    }

    pub fn weights(&self) -> &[u64] {
        &self.weights
    }

    pub fn values(&self) -> &[u64] {
        &self.values
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// No item can be packed: the item set is empty or the capacity is 0.
    pub fn is_trivial(&self) -> bool {
        self.num_items == 0 || self.capacity == 0
    }

    /// Saturates at `u64::MAX`.
    pub fn total_weight(&self) -> u64 {
        self.weights
            .iter()
            .fold(0u64, |acc, &w| acc.saturating_add(w))
    }

    pub fn total_value(&self) -> u64 {
        self.values.iter().sum()
    }

    pub fn evaluate_selection(&self, selection: &Selection) -> Result<u64, KnapsackError> {
        let mut seen = HashSet::with_capacity(selection.items.len());
        let mut total_weight = 0u64;
        let mut total_value = 0u64;
        for &item in &selection.items {
            if item >= self.num_items {
                return Err(KnapsackError::ItemOutOfBounds {
                    index: item,
                    num_items: self.num_items,
                });
            }
            if !seen.insert(item) {
                return Err(KnapsackError::DuplicateItem(item));
            }
            total_weight = total_weight.saturating_add(self.weights[item]);
            total_value += self.values[item];
        }

        if total_weight > self.capacity {
            return Err(KnapsackError::OverCapacity {
                total_weight,
                capacity: self.capacity,
            });
        }
        Ok(total_value)
    }

    pub fn compute_exhaustive_baseline(&self) -> Result<Selection, KnapsackError> {
        baselines::exhaustive::solve_challenge(self)
    }
}

/// `budget` percent of the total weight, rounded down.
fn budget_capacity(weights: &[u64], budget: u32) -> Result<u64, KnapsackError> {
    weights
        .iter()
        .try_fold(0u64, |acc, &w| acc.checked_add(w))
        .and_then(|total| total.checked_mul(budget as u64))
        .map(|scaled| scaled / 100)
        .ok_or_else(|| {
            KnapsackError::InvalidTrack(format!(
                "total weight at budget {}% overflows u64",
                budget
            ))
        })
}

impl TryFrom<Instance> for Challenge {
    type Error = KnapsackError;

    fn try_from(instance: Instance) -> Result<Self, Self::Error> {
        Challenge::new(instance.weights, instance.values, instance.capacity)
    }
}

impl From<Challenge> for Instance {
    fn from(challenge: Challenge) -> Self {
        // Entries come from i64 inputs or u32 track bounds, so they fit back.
        Instance {
            weights: challenge.weights.iter().map(|&w| w as i64).collect(),
            values: challenge.values.iter().map(|&v| v as i64).collect(),
            capacity: challenge.capacity as i64,
        }
    }
}
