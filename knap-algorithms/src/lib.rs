pub mod config;
pub use config::{SolverConfig, DEFAULT_MAX_CAPACITY};
pub mod knapsack;
