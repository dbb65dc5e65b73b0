//! In-memory DNS and zone transfer clients for unit tests.

use std::collections::{HashMap, HashSet};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::rdata::{A, AAAA, MX, NS, SOA, SRV, TXT};
use hickory_resolver::proto::rr::{Name, RData};

use crate::dns::{RecordLookup, RecordType};
use crate::error_handling::{DnsQueryError, TransferError};
use crate::zone_transfer::ZoneTransfer;

pub fn name(s: &str) -> Name {
    Name::from_ascii(s).expect("test name should parse")
}

pub fn a(ip: &str) -> RData {
    RData::A(A(ip.parse::<Ipv4Addr>().expect("test IPv4 should parse")))
}

pub fn aaaa(ip: &str) -> RData {
    RData::AAAA(AAAA(ip.parse::<Ipv6Addr>().expect("test IPv6 should parse")))
}

pub fn ns(host: &str) -> RData {
    RData::NS(NS(name(host)))
}

pub fn mx(preference: u16, host: &str) -> RData {
    RData::MX(MX::new(preference, name(host)))
}

pub fn txt(parts: &[&str]) -> RData {
    RData::TXT(TXT::new(parts.iter().map(|p| p.to_string()).collect()))
}

pub fn soa(mname: &str, rname: &str, serial: u32) -> RData {
    RData::SOA(SOA::new(
        name(mname),
        name(rname),
        serial,
        7200,
        3600,
        1_209_600,
        3600,
    ))
}

pub fn srv(priority: u16, weight: u16, port: u16, target: &str) -> RData {
    RData::SRV(SRV::new(priority, weight, port, name(target)))
}

/// Answers from a fixed table; anything not in the table is "no records found".
#[derive(Default)]
pub struct MockLookup {
    records: HashMap<(String, RecordType), Vec<RData>>,
    panic_domains: HashSet<String>,
    delay: Option<Duration>,
    pub calls: AtomicUsize,
    active: AtomicUsize,
    pub max_active: AtomicUsize,
}

impl MockLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, domain: &str, record_type: RecordType, answers: Vec<RData>) -> Self {
        self.records
            .insert((domain.to_string(), record_type), answers);
        self
    }

    /// Every lookup for `domain` panics.
    pub fn panicking_on(mut self, domain: &str) -> Self {
        self.panic_domains.insert(domain.to_string());
        self
    }

    /// Every lookup sleeps for `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

impl RecordLookup for MockLookup {
    async fn lookup(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<RData>, DnsQueryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.panic_domains.contains(domain) {
            panic!("mock lookup configured to fail for {domain}");
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
            .ok_or_else(|| {
                DnsQueryError::Other(format!("no {record_type} records found for {domain}"))
            })
    }
}

/// Zone transfer client that permits only the nameservers it is told to.
#[derive(Default)]
pub struct MockTransfer {
    permitted: HashMap<String, Vec<String>>,
    unreachable: HashSet<String>,
    delay: Option<Duration>,
    pub probed: Mutex<Vec<(String, String)>>,
}

impl MockTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn permitting(mut self, nameserver: &str, lines: &[&str]) -> Self {
        self.permitted.insert(
            nameserver.to_string(),
            lines.iter().map(|l| l.to_string()).collect(),
        );
        self
    }

    pub fn unreachable(mut self, nameserver: &str) -> Self {
        self.unreachable.insert(nameserver.to_string());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn probed(&self) -> Vec<(String, String)> {
        self.probed.lock().expect("probe log poisoned").clone()
    }
}

impl ZoneTransfer for MockTransfer {
    async fn transfer(&self, nameserver: &str, domain: &str) -> Result<Vec<String>, TransferError> {
        self.probed
            .lock()
            .expect("probe log poisoned")
            .push((domain.to_string(), nameserver.to_string()));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.unreachable.contains(nameserver) {
            return Err(TransferError::Setup(format!("no address for {nameserver}")));
        }
        match self.permitted.get(nameserver) {
            Some(lines) => Ok(lines.clone()),
            None => Err(TransferError::Refused(ResponseCode::Refused)),
        }
    }
}
