//! Record queries.
//!
//! [`RecordLookup`] is the DNS query client the scan depends on. The production
//! implementation, [`HickoryLookup`], wraps a shared `TokioAsyncResolver`; tests
//! substitute in-memory mocks.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::proto::rr::RData;
use hickory_resolver::TokioAsyncResolver;
use log::{error, info};
use strum::IntoEnumIterator;

use super::format::format_answers;
use super::types::{DomainRecordSet, RecordQueryOutcome, RecordType};
use crate::error_handling::DnsQueryError;

/// A DNS query client: one query, one answer set or one failure.
pub trait RecordLookup: Send + Sync + 'static {
    /// Queries `record_type` for `domain`, returning the raw answer data.
    fn lookup(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> impl Future<Output = Result<Vec<RData>, DnsQueryError>> + Send;
}

/// [`RecordLookup`] backed by `hickory-resolver`.
#[derive(Clone)]
pub struct HickoryLookup {
    resolver: Arc<TokioAsyncResolver>,
}

impl HickoryLookup {
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

impl RecordLookup for HickoryLookup {
    async fn lookup(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<RData>, DnsQueryError> {
        let lookup = self.resolver.lookup(domain, record_type.into()).await?;
        Ok(lookup.iter().cloned().collect())
    }
}

/// Queries one record type for a domain.
///
/// # Arguments
///
/// * `lookup` - The DNS query client
/// * `domain` - The domain to query
/// * `record_type` - The record type to query
/// * `timeout` - Upper bound for the query
///
/// # Returns
///
/// The formatted values, or `Failure` with the reason if the query failed or
/// timed out. Never returns an error.
pub async fn resolve_record<L: RecordLookup>(
    lookup: &L,
    domain: &str,
    record_type: RecordType,
    timeout: Duration,
) -> RecordQueryOutcome {
    let result = match tokio::time::timeout(timeout, lookup.lookup(domain, record_type)).await {
        Ok(result) => result,
        Err(_) => Err(DnsQueryError::Timeout(timeout)),
    };

    match result {
        Ok(answers) => {
            let outcome = format_answers(record_type, &answers);
            match &outcome {
                RecordQueryOutcome::Success(values) => {
                    info!("Fetched {record_type} records for {domain}: {values:?}");
                }
                RecordQueryOutcome::Failure(reason) => {
                    error!("Error fetching {record_type} for {domain}: {reason}");
                }
            }
            outcome
        }
        Err(e) => {
            error!("Error fetching {record_type} for {domain}: {e}");
            RecordQueryOutcome::Failure(e.to_string())
        }
    }
}

/// Queries every [`RecordType`] for a domain, one after another.
///
/// The returned set always holds all nine types regardless of how many queries
/// failed.
pub async fn resolve_all<L: RecordLookup>(
    lookup: &L,
    domain: &str,
    timeout: Duration,
) -> DomainRecordSet {
    let mut outcomes = Vec::new();
    for record_type in RecordType::iter() {
        let outcome = resolve_record(lookup, domain, record_type, timeout).await;
        outcomes.push((record_type, outcome));
    }
    outcomes.into_iter().collect()
}

impl<T: RecordLookup> RecordLookup for Arc<T> {
    async fn lookup(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<RData>, DnsQueryError> {
        self.as_ref().lookup(domain, record_type).await
    }
}
