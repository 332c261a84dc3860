//! Closest-pair selection over the working set of intervals.

use crate::error::MergeError;
use crate::models::AddressInterval;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// How the per-field address differences are combined into one distance.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    /// Plain sum of both differences, never wraps.
    #[default]
    Widened,
    /// Each difference goes through an i32 and back, and the sum wraps at 32 bits.
    /// Far apart ranges can come out as "close" under this metric.
    Legacy,
}

impl std::str::FromStr for DistanceMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "widened" => Ok(DistanceMetric::Widened),
            "legacy" => Ok(DistanceMetric::Legacy),
            other => Err(format!("unknown distance metric: {other}")),
        }
    }
}

/// Distance between two intervals: `|a.first - b.first| + |a.last - b.last|`.
pub fn distance(a: &AddressInterval, b: &AddressInterval, metric: DistanceMetric) -> u64 {
    let d_first = a.first.abs_diff(b.first);
    let d_last = a.last.abs_diff(b.last);
    match metric {
        DistanceMetric::Widened => d_first as u64 + d_last as u64,
        DistanceMetric::Legacy => {
            let narrow = |d: u32| (d as i32) as u32;
            narrow(d_first).wrapping_add(narrow(d_last)) as u64
        }
    }
}

/// Find the pair `(i, j)`, `i < j`, with the smallest distance.
///
/// Pairs are scanned in `(0,1), (0,2), .. (1,2), ..` order and ties keep the
/// first pair seen. Returns `None` when fewer than 2 intervals are given.
pub fn find_closest_pair(
    vectors: &[AddressInterval],
    metric: DistanceMetric,
) -> Option<(usize, usize, u64)> {
    (0..vectors.len())
        .tuple_combinations::<(usize, usize)>()
        .map(|(i, j)| {
            let d = distance(&vectors[i], &vectors[j], metric);
            log::trace!("distance({}, {}) = {d}", vectors[i], vectors[j]);
            (i, j, d)
        })
        .min_by_key(|&(_, _, d)| d)
}

/// Remove the closest pair from `vectors` and return it.
///
/// # Returns
/// * `Ok((a, b))` - the pair, in collection order; `vectors` is now 2 shorter
/// * `Err(MergeError::InsufficientVectors)` - fewer than 2 intervals
pub fn take_closest_pair(
    vectors: &mut Vec<AddressInterval>,
    metric: DistanceMetric,
) -> Result<(AddressInterval, AddressInterval), MergeError> {
    let (i, j, d) = find_closest_pair(vectors, metric).ok_or(MergeError::InsufficientVectors {
        found: vectors.len(),
    })?;
    log::debug!(
        "Closest pair [{i}]{} [{j}]{} distance={d} ({metric:?})",
        vectors[i],
        vectors[j]
    );

    let a = vectors[i];
    let b = vectors[j];
    // j > i, so dropping j first leaves i in place
    for idx in [j, i] {
        vectors.remove(idx);
    }
    Ok((a, b))
}
