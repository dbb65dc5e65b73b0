//! Error type definitions.

use std::path::PathBuf;
use std::time::Duration;

use hickory_resolver::error::ResolveError;
use hickory_resolver::proto::error::ProtoError;
use hickory_resolver::proto::op::ResponseCode;
use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the logger with custom message (e.g., file creation).
    #[error("Logger initialization error: {0}")]
    LoggerSetupError(String),
}

/// Invalid or unreadable scan input. Fatal to the invocation.
#[derive(Error, Debug)]
pub enum InputError {
    /// The inventory path does not exist.
    #[error("Inventory file not found: {}", .0.display())]
    InventoryNotFound(PathBuf),

    /// The inventory exists but could not be read.
    #[error("Failed to read inventory {}: {source}", path.display())]
    InventoryRead {
        /// Inventory path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A single-domain scan was requested with an empty domain.
    #[error("Specify --inventory or a single domain")]
    EmptyTarget,
}

/// A single DNS query failed.
#[derive(Error, Debug)]
pub enum DnsQueryError {
    /// The resolver returned an error (NXDOMAIN, no records, SERVFAIL, ...).
    #[error("{0}")]
    Resolve(#[from] ResolveError),

    /// The query did not complete within the configured timeout.
    #[error("query timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),

    /// Any other lookup failure.
    #[error("{0}")]
    Other(String),
}

/// A zone transfer attempt failed.
///
/// Only [`TransferError::Setup`] means the probe never reached the transfer
/// protocol; every other variant is the nameserver (or the path to it) declining
/// the transfer in some form.
#[derive(Error, Debug)]
pub enum TransferError {
    /// The nameserver's address could not be determined.
    #[error("cannot reach nameserver: {0}")]
    Setup(String),

    /// The nameserver answered with a non-success response code.
    #[error("transfer refused ({0})")]
    Refused(ResponseCode),

    /// Connection or stream failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A DNS message could not be encoded or decoded.
    #[error("protocol error: {0}")]
    Proto(#[from] ProtoError),

    /// The response stream was not a valid AXFR.
    #[error("malformed transfer: {0}")]
    Malformed(String),
}

impl TransferError {
    /// Whether the failure happened before any transfer was attempted.
    pub fn is_setup(&self) -> bool {
        matches!(self, TransferError::Setup(_))
    }
}

/// A domain scan task failed as a whole; the domain is omitted from the report.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The task panicked or was aborted.
    #[error("scan task failed: {0}")]
    Panicked(String),
}

/// Report rendering failed.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Writing the report file failed.
    #[error("Report I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The spreadsheet writer failed.
    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

/// Alert delivery failed.
#[derive(Error, Debug)]
pub enum AlertError {
    /// A sender or recipient address did not parse.
    #[error("Invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The email message could not be built.
    #[error("Failed to build email: {0}")]
    Build(#[from] lettre::error::Error),

    /// The SMTP exchange failed.
    #[error("SMTP error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The blocking send task did not complete.
    #[error("Email task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_error_setup_classification() {
        assert!(TransferError::Setup("no address".into()).is_setup());
        assert!(!TransferError::Refused(ResponseCode::Refused).is_setup());
        assert!(!TransferError::Malformed("empty".into()).is_setup());
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        assert!(!TransferError::from(io).is_setup());
    }

    #[test]
    fn test_input_error_messages() {
        let err = InputError::InventoryNotFound(PathBuf::from("missing.txt"));
        assert_eq!(err.to_string(), "Inventory file not found: missing.txt");
        assert_eq!(
            InputError::EmptyTarget.to_string(),
            "Specify --inventory or a single domain"
        );
    }

    #[test]
    fn test_scan_error_messages() {
        let err = ScanError::Panicked("panicked: boom".into());
        assert_eq!(err.to_string(), "scan task failed: panicked: boom");
    }

    #[test]
    fn test_dns_query_timeout_message() {
        let err = DnsQueryError::Timeout(Duration::from_millis(1500));
        assert_eq!(err.to_string(), "query timed out after 1.5s");
    }
}
