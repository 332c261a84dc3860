//! Single merge cycle over a list of raw tokens.
//!
//! Tokens without a `/` are passed through untouched. Everything else must parse
//! as a CIDR; the two closest prefixes are replaced by their supernet.

use super::merger::merge_pair;
use super::selector::{take_closest_pair, DistanceMetric};
use crate::error::{MergeError, ParseError};
use crate::models::AddressInterval;
use serde::{Deserialize, Serialize};

/// Options for a merge run.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeOptions {
    /// Target prefix count. Reserved: only one merge cycle is ever run.
    pub max_count: u8,
    /// Distance used to pick the pair to merge.
    pub metric: DistanceMetric,
}

/// Everything produced by one merge cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeOutcome {
    /// Tokens without a `/`, in input order.
    pub literals: Vec<String>,
    /// Prefixes not chosen for merging, followed by the merged one.
    pub prefixes: Vec<AddressInterval>,
    /// The supernet that replaced the chosen pair.
    pub merged: AddressInterval,
    /// The pair that was merged, in input order.
    pub consumed: [AddressInterval; 2],
    /// Literals followed by the rendered prefixes.
    pub output: Vec<String>,
}

/// Split tokens into pass-through literals and parsed intervals.
///
/// A token is a literal when it has no `/`. The first token that has one but
/// fails to parse aborts the split.
pub fn partition_tokens<S: AsRef<str>>(
    input: &[S],
) -> Result<(Vec<String>, Vec<AddressInterval>), ParseError> {
    let mut literals = Vec::new();
    let mut vectors = Vec::new();

    for token in input {
        let token: &str = token.as_ref();
        if token.contains('/') {
            log::trace!("cidr token: {token}");
            vectors.push(AddressInterval::parse(token)?);
        } else {
            log::trace!("literal token: {token}");
            literals.push(token.to_string());
        }
    }

    if !literals.is_empty() {
        log::warn!("Passing {} non-CIDR token(s) through unchanged", literals.len());
    }
    Ok((literals, vectors))
}

/// Run one merge cycle and return every piece of the result.
pub fn merge_cidrs_detailed<S: AsRef<str>>(
    input: &[S],
    options: &MergeOptions,
) -> Result<MergeOutcome, MergeError> {
    log::debug!(
        "merge_cidrs: {} token(s), max_count={} (reserved)",
        input.len(),
        options.max_count
    );

    let (literals, mut vectors) = partition_tokens(input)?;

    let (a, b) = take_closest_pair(&mut vectors, options.metric)?;
    let merged = merge_pair(&a, &b)?;
    vectors.push(merged);

    log::info!(
        "Merged {a} + {b} -> {merged}, {} prefix(es) remain",
        vectors.len()
    );

    let output = literals
        .iter()
        .cloned()
        .chain(vectors.iter().map(|v| v.to_string()))
        .collect();

    Ok(MergeOutcome {
        literals,
        prefixes: vectors,
        merged,
        consumed: [a, b],
        output,
    })
}

/// Merge the closest pair of CIDRs in `input` using the given options.
pub fn merge_cidrs_with<S: AsRef<str>>(
    input: &[S],
    options: &MergeOptions,
) -> Result<Vec<String>, MergeError> {
    merge_cidrs_detailed(input, options).map(|outcome| outcome.output)
}

/// Merge the closest pair of CIDRs in `input`.
///
/// `max_count` is accepted but currently unused; exactly one pair is merged.
///
/// # Examples
/// ```
/// let out = netmerge::merge_cidrs(&["10.0.0.0/24", "10.0.1.0/24"], 1).unwrap();
/// assert_eq!(out, vec!["10.0.0.0/23"]);
/// ```
pub fn merge_cidrs<S: AsRef<str>>(input: &[S], max_count: u8) -> Result<Vec<String>, MergeError> {
    let options = MergeOptions {
        max_count,
        ..MergeOptions::default()
    };
    merge_cidrs_with(input, &options)
}
