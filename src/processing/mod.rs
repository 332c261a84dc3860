//! Prefix merging logic.
//!
//! - [`selector`] - distance metric and closest-pair selection
//! - [`merger`] - supernet of two intervals
//! - [`orchestrator`] - one full merge cycle over raw tokens

pub mod merger;
pub mod orchestrator;
pub mod selector;

// Re-export public functions
pub use merger::merge_pair;
pub use orchestrator::{
    merge_cidrs, merge_cidrs_detailed, merge_cidrs_with, partition_tokens, MergeOptions,
    MergeOutcome,
};
pub use selector::{distance, find_closest_pair, take_closest_pair, DistanceMetric};
