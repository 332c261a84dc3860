//! Domain models for prefix merging.
//!
//! - [`AddressInterval`] - one IPv4 prefix as a `[first, last]` address range

mod interval;

// Re-export public types
pub use interval::{
    broadcast_addr, get_cidr_mask, network_addr, shared_prefix_len, u32_to_ip, AddressInterval,
    MAX_LENGTH,
};
