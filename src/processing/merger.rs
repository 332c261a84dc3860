//! Supernet computation for a pair of intervals.

use crate::error::ParseError;
use crate::models::{shared_prefix_len, u32_to_ip, AddressInterval};

/// Smallest single prefix that covers both `a` and `b`.
///
/// The prefix length is the number of leading bits shared by the lowest and the
/// highest address of the pair. The result is built as a CIDR string and parsed
/// again, so it is always aligned and may cover more than `a` and `b` together.
pub fn merge_pair(a: &AddressInterval, b: &AddressInterval) -> Result<AddressInterval, ParseError> {
    let min_addr = a.first.min(b.first);
    let max_addr = a.last.max(b.last);

    let prefix_len = shared_prefix_len(min_addr, max_addr);
    let cidr = format!("{}/{}", u32_to_ip(min_addr), prefix_len);
    log::debug!("merge {a} + {b} -> {cidr}");

    AddressInterval::parse(&cidr)
}
