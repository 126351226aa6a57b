use serde::{Deserialize, Serialize};

/// Largest capacity the solver will allocate a table for (one `u64` per cell).
pub const DEFAULT_MAX_CAPACITY: u64 = 100_000_000;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SolverConfig {
    pub max_capacity: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_capacity: DEFAULT_MAX_CAPACITY,
        }
    }
}
