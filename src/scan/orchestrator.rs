//! Concurrent multi-domain scanning.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::{debug, error, info, warn};
use tokio::task::JoinError;

use super::task::{DomainScanResult, DomainScanner, ScanOptions};
use crate::dns::RecordLookup;
use crate::error_handling::ScanError;
use crate::initialization::init_semaphore;
use crate::zone_transfer::ZoneTransfer;

/// Results of a scan run, keyed by domain.
///
/// Domains whose task failed are absent from the results and listed in
/// [`ScanReport::omitted`] with the reason.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    results: BTreeMap<String, DomainScanResult>,
    omitted: BTreeMap<String, String>,
}

impl ScanReport {
    /// Builds a report from finished results. Later duplicates replace earlier ones.
    pub fn from_results(results: impl IntoIterator<Item = DomainScanResult>) -> Self {
        Self {
            results: results
                .into_iter()
                .map(|result| (result.domain.clone(), result))
                .collect(),
            omitted: BTreeMap::new(),
        }
    }

    pub fn get(&self, domain: &str) -> Option<&DomainScanResult> {
        self.results.get(domain)
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.results.contains_key(domain)
    }

    /// Number of scanned domains (omissions not counted).
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Scanned domains in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DomainScanResult)> {
        self.results
            .iter()
            .map(|(domain, result)| (domain.as_str(), result))
    }

    /// Domains left out of the report, with the failure reason.
    pub fn omitted(&self) -> &BTreeMap<String, String> {
        &self.omitted
    }
}

/// Trims, lowercases, and de-duplicates domains, keeping first-seen order.
///
/// A single trailing dot is dropped so `example.com.` and `example.com` are the
/// same domain. Blank entries are skipped.
pub fn normalize_domains<I, S>(domains: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for raw in domains {
        let trimmed = raw.as_ref().trim();
        let domain = trimmed
            .strip_suffix('.')
            .unwrap_or(trimmed)
            .to_ascii_lowercase();
        if domain.is_empty() {
            continue;
        }
        if seen.insert(domain.clone()) {
            unique.push(domain);
        } else {
            debug!("Skipping duplicate domain {domain}");
        }
    }
    unique
}

/// Scans every domain, at most `max_concurrency` at a time.
///
/// Each unique domain gets its own spawned task holding a semaphore permit for
/// its lifetime. Every network step inside a task is individually time-bounded,
/// so a task always finishes with a result; one that panics instead is logged
/// and its domain omitted, leaving the remaining domains unaffected. Returns once
/// every task has finished.
///
/// A `max_concurrency` of 0 is treated as 1.
pub async fn scan_all<L, X, I, S>(
    scanner: Arc<DomainScanner<L, X>>,
    domains: I,
    options: ScanOptions,
    max_concurrency: usize,
) -> ScanReport
where
    L: RecordLookup,
    X: ZoneTransfer,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let domains = normalize_domains(domains);
    info!(
        "Scanning {} domain(s) with concurrency {}",
        domains.len(),
        max_concurrency.max(1)
    );

    let semaphore = init_semaphore(max_concurrency.max(1));
    let mut tasks = FuturesUnordered::new();

    for domain in domains {
        let permit = match Arc::clone(&semaphore).acquire_owned().await {
            Ok(permit) => permit,
            Err(_) => {
                warn!("Semaphore closed, skipping domain: {domain}");
                continue;
            }
        };

        let scanner = Arc::clone(&scanner);
        let task_domain = domain.clone();
        let handle = tokio::spawn(async move {
            let _permit = permit;
            scanner.scan(&task_domain, &options).await
        });
        tasks.push(async move { (domain, handle.await) });
    }

    let mut report = ScanReport::default();
    while let Some((domain, joined)) = tasks.next().await {
        match joined.map_err(|e| ScanError::Panicked(describe_join_error(e))) {
            Ok(result) => {
                report.results.insert(domain, result);
            }
            Err(e) => {
                error!("Error analyzing {domain}: {e}");
                report.omitted.insert(domain, e.to_string());
            }
        }
    }

    info!(
        "Scan complete: {} domain(s) scanned, {} omitted",
        report.len(),
        report.omitted.len()
    );
    report
}

fn describe_join_error(e: JoinError) -> String {
    if e.is_cancelled() {
        return "task cancelled".to_string();
    }
    let payload = e.into_panic();
    if let Some(message) = payload.downcast_ref::<String>() {
        format!("panicked: {message}")
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        format!("panicked: {message}")
    } else {
        "panicked".to_string()
    }
}
