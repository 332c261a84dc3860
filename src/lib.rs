//! Consolidate IPv4 prefixes by merging the closest pair into a covering supernet.
//!
//! - [`models`] - [`models::AddressInterval`] and mask helpers
//! - [`processing`] - distance, closest-pair selection, supernet merge
//! - [`input`] / [`output`] - token splitting and result rendering
//! - [`config`] / [`logging`] - runtime settings for the binary

pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{MergeError, ParseError};
pub use models::AddressInterval;
pub use processing::{
    merge_cidrs, merge_cidrs_detailed, merge_cidrs_with, DistanceMetric, MergeOptions,
    MergeOutcome,
};
