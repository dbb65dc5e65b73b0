//! Single-domain scan task.

use std::collections::BTreeMap;
use std::time::Duration;

use log::{debug, info};

use crate::config::{DNS_TIMEOUT_SECS, ZONE_TRANSFER_TIMEOUT_SECS};
use crate::dns::{resolve_all, DomainRecordSet, RecordLookup};
use crate::zone_transfer::{probe_zone_transfer, ZoneTransfer, ZoneTransferResult};

/// Per-scan switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Probe every nameserver of the domain for an open zone transfer.
    pub check_zone_transfer: bool,
}

/// Everything learned about one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainScanResult {
    /// The scanned domain
    pub domain: String,
    /// One outcome per record type
    pub records: DomainRecordSet,
    /// Probe outcome per nameserver; empty unless zone transfers were checked
    pub transfers: BTreeMap<String, ZoneTransferResult>,
}

impl DomainScanResult {
    /// Nameservers that handed over the zone.
    pub fn exposed_nameservers(&self) -> impl Iterator<Item = &str> {
        self.transfers
            .iter()
            .filter(|(_, result)| result.is_exposed())
            .map(|(nameserver, _)| nameserver.as_str())
    }
}

/// Scans single domains with a DNS client and a zone transfer client.
///
/// One scanner is shared by every task of a run; it holds no per-domain state.
pub struct DomainScanner<L, X> {
    lookup: L,
    transfer: X,
    query_timeout: Duration,
    transfer_timeout: Duration,
}

impl<L: RecordLookup, X: ZoneTransfer> DomainScanner<L, X> {
    pub fn new(lookup: L, transfer: X) -> Self {
        Self {
            lookup,
            transfer,
            query_timeout: Duration::from_secs(DNS_TIMEOUT_SECS),
            transfer_timeout: Duration::from_secs(ZONE_TRANSFER_TIMEOUT_SECS),
        }
    }

    pub fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = timeout;
        self
    }

    pub fn with_transfer_timeout(mut self, timeout: Duration) -> Self {
        self.transfer_timeout = timeout;
        self
    }

    /// Scans one domain.
    ///
    /// Queries all record types, then, if `options.check_zone_transfer` is set,
    /// probes each nameserver from the domain's own NS answer. Failures are
    /// recorded in the result, never returned.
    pub async fn scan(&self, domain: &str, options: &ScanOptions) -> DomainScanResult {
        debug!("Scanning {domain}");
        let records = resolve_all(&self.lookup, domain, self.query_timeout).await;

        let mut transfers = BTreeMap::new();
        if options.check_zone_transfer {
            let nameservers = records.nameservers();
            if nameservers.is_empty() {
                info!("No nameservers to probe for {domain}");
            } else {
                info!("Nameservers for {domain}: {nameservers:?}");
            }
            for nameserver in nameservers {
                let result =
                    probe_zone_transfer(&self.transfer, domain, &nameserver, self.transfer_timeout)
                        .await;
                transfers.insert(nameserver, result);
            }
        }

        DomainScanResult {
            domain: domain.to_string(),
            records,
            transfers,
        }
    }
}
