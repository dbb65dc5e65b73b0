//! Error types.
//!
//! Errors are split by how far they are allowed to travel:
//! - **Encoded**: `DnsQueryError` and `TransferError` never leave the scan task;
//!   they are folded into `RecordQueryOutcome` / `ZoneTransferResult` values
//! - **Isolated**: `ScanError` stops at the orchestrator, which logs it and omits
//!   the domain from the report
//! - **Degrading**: `ReportError` and `AlertError` are logged and the run continues
//! - **Fatal**: `InputError` and `InitializationError` end the invocation

mod types;

// Re-export public API
pub use types::{
    AlertError, DnsQueryError, InitializationError, InputError, ReportError, ScanError,
    TransferError,
};
