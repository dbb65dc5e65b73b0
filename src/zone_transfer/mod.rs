//! Zone transfer (AXFR) exposure probing.
//!
//! An authoritative nameserver that hands its full zone to anyone who asks is
//! misconfigured. This module asks:
//! - `ZoneTransfer` - the transfer client seam
//! - `AxfrClient` - AXFR over TCP built on `hickory-proto` messages
//! - `probe_zone_transfer` - collapses the client's answer into a `ZoneTransferResult`

mod client;
mod probe;
mod types;

// Re-export public API
pub use client::{AxfrClient, ZoneTransfer};
pub use probe::probe_zone_transfer;
pub use types::ZoneTransferResult;
