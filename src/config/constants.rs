//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including timeouts, concurrency limits, and default file paths.

/// Default number of domains scanned concurrently.
pub const DEFAULT_MAX_CONCURRENCY: usize = 10;

// Network operation timeouts
/// DNS query timeout in seconds, applied to every record lookup.
pub const DNS_TIMEOUT_SECS: u64 = 5;
/// Zone transfer timeout in seconds, applied to every nameserver probe.
pub const ZONE_TRANSFER_TIMEOUT_SECS: u64 = 5;
/// Resolver attempts per query before giving up.
pub const DNS_ATTEMPTS: usize = 2;

/// Port nameservers accept zone transfers on (DNS over TCP).
pub const DNS_TCP_PORT: u16 = 53;

/// Upper bound on records accepted from a single zone transfer.
/// Keeps a hostile or enormous zone from exhausting memory.
pub const MAX_ZONE_TRANSFER_RECORDS: usize = 100_000;

// Output paths
pub const DEFAULT_LOG_FILE: &str = "dns_audit.log";
pub const DEFAULT_REPORT_OUT: &str = "report.html";

// Alerting
pub const DEFAULT_SMTP_PORT: u16 = 587;
pub const ALERT_SUBJECT: &str = "DNS Audit Alert";
/// Sender used when neither `--from-email` nor `--smtp-user` is an address.
pub const FALLBACK_SENDER: &str = "dns-audit@localhost";
