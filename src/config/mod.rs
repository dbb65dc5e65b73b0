//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, limits, default paths)
//! - The library `Config` and its building blocks
//! - CLI option parsing (`Opt`)

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{AlertConfig, Config, LogFormat, LogLevel, Opt, ReportFormat, ScanTarget};
