use thiserror::Error;

/// Every way a knapsack instance, selection or solve can be rejected.
///
/// All variants are raised before any dynamic programming work starts, so a
/// caller never observes a partial result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KnapsackError {
    #[error("weights ({weights}) and values ({values}) differ in length")]
    LengthMismatch { weights: usize, values: usize },

    #[error("item {index} has negative weight ({weight})")]
    NegativeWeight { index: usize, weight: i64 },

    #[error("item {index} has negative value ({value})")]
    NegativeValue { index: usize, value: i64 },

    #[error("sum of item values overflows u64")]
    ValueOverflow,

    #[error("capacity ({capacity}) exceeds max capacity ({max_capacity})")]
    CapacityOverflow { capacity: u64, max_capacity: u64 },

    #[error("failed to allocate {cells} dp cells")]
    Allocation { cells: u64 },

    #[error("item ({0}) selected more than once")]
    DuplicateItem(usize),

    #[error("item ({index}) is out of bounds for {num_items} items")]
    ItemOutOfBounds { index: usize, num_items: usize },

    #[error("total weight ({total_weight}) exceeded capacity ({capacity})")]
    OverCapacity { total_weight: u64, capacity: u64 },

    #[error("{num_items} items is too many for exhaustive search (max {max})")]
    TooManyItems { num_items: usize, max: usize },

    #[error("invalid track: {0}")]
    InvalidTrack(String),
}
