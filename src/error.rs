//! Error types for prefix parsing and merging.

use thiserror::Error;

/// A token that looked like a CIDR (contains `/`) but could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid CIDR format: {0}")]
    InvalidFormat(String),
    #[error("invalid IPv4 address in CIDR: {0}")]
    InvalidAddress(String),
    #[error("invalid prefix length in CIDR: {0}")]
    InvalidPrefixLength(String),
}

/// Errors returned by the merge operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("at least 2 CIDR prefixes are needed to merge, found {found}")]
    InsufficientVectors { found: usize },
}
