//! Domain scanning.
//!
//! This module turns a list of domains into a `ScanReport`:
//! - `DomainScanner::scan` - records (and optionally zone transfers) for one domain
//! - `scan_all` - runs scans concurrently under a fixed bound, isolating failures
//!
//! A domain whose scan task fails outright is logged and left out of the report;
//! it never takes other domains down with it.

mod orchestrator;
mod task;

// Re-export public API
pub use orchestrator::{normalize_domains, scan_all, ScanReport};
pub use task::{DomainScanResult, DomainScanner, ScanOptions};
