pub mod error;
pub use error::KnapsackError;
pub mod knapsack;
