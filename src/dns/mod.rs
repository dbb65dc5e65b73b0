//! DNS record resolution.
//!
//! This module queries the fixed set of record types for a domain using
//! `hickory-resolver`:
//! - `RecordType` - the nine record types every scan attempts
//! - `RecordLookup` - the query seam (hickory in production, mocks in tests)
//! - `resolve_record` / `resolve_all` - one outcome per type, never aborting early
//!
//! A failed query for one type is recorded as `RecordQueryOutcome::Failure` and
//! does not affect the other types.

mod format;
mod records;
mod types;

// Re-export public API
pub use format::format_answers;
pub use records::{resolve_all, resolve_record, HickoryLookup, RecordLookup};
pub use types::{DomainRecordSet, RecordQueryOutcome, RecordType};
