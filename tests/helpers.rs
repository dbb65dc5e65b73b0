// Shared test doubles for the DNS and zone transfer seams.
//
// This module provides in-memory clients used across multiple test files so the
// scan pipeline can run without network access.

use std::collections::{HashMap, HashSet};
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use dns_audit::dns::{RecordLookup, RecordType};
use dns_audit::error_handling::{DnsQueryError, TransferError};
use dns_audit::zone_transfer::ZoneTransfer;
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::rdata::{A, NS};
use hickory_resolver::proto::rr::{Name, RData};

/// Record table keyed by (domain, type). Missing entries fail with "no records".
#[derive(Default)]
pub struct TableLookup {
    records: HashMap<(String, RecordType), Vec<RData>>,
    panic_domains: HashSet<String>,
    delay: Option<Duration>,
    active: AtomicUsize,
    pub max_active: AtomicUsize,
}

#[allow(dead_code)] // Used by other test files
impl TableLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn a(mut self, domain: &str, ip: &str) -> Self {
        let ip: Ipv4Addr = ip.parse().expect("test IPv4 should parse");
        self.records
            .entry((domain.to_string(), RecordType::A))
            .or_default()
            .push(RData::A(A(ip)));
        self
    }

    pub fn ns(mut self, domain: &str, host: &str) -> Self {
        let host = Name::from_ascii(host).expect("test name should parse");
        self.records
            .entry((domain.to_string(), RecordType::NS))
            .or_default()
            .push(RData::NS(NS(host)));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Every lookup for `domain` panics, taking its scan task down.
    pub fn panicking_on(mut self, domain: &str) -> Self {
        self.panic_domains.insert(domain.to_string());
        self
    }
}

impl RecordLookup for TableLookup {
    async fn lookup(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<RData>, DnsQueryError> {
        if self.panic_domains.contains(domain) {
            panic!("lookup table cannot serve {domain}");
        }
        let now_active = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_active.fetch_max(now_active, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.active.fetch_sub(1, Ordering::SeqCst);

        self.records
            .get(&(domain.to_string(), record_type))
            .cloned()
            .ok_or_else(|| DnsQueryError::Other(format!("no {record_type} records for {domain}")))
    }
}

/// Zone transfer client that only the listed nameservers answer.
#[derive(Default)]
pub struct OpenNameservers {
    zones: HashMap<String, Vec<String>>,
}

#[allow(dead_code)] // Used by other test files
impl OpenNameservers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(mut self, nameserver: &str, lines: &[&str]) -> Self {
        self.zones.insert(
            nameserver.to_string(),
            lines.iter().map(|l| l.to_string()).collect(),
        );
        self
    }
}

impl ZoneTransfer for OpenNameservers {
    async fn transfer(&self, nameserver: &str, _domain: &str) -> Result<Vec<String>, TransferError> {
        self.zones
            .get(nameserver)
            .cloned()
            .ok_or(TransferError::Refused(ResponseCode::Refused))
    }
}
