//! Record types and per-type query outcomes.

use std::collections::BTreeMap;

use hickory_resolver::proto::rr::RecordType as ProtoRecordType;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

/// The record types queried for every domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Display)]
#[allow(clippy::upper_case_acronyms)]
pub enum RecordType {
    A,
    AAAA,
    MX,
    TXT,
    NS,
    CNAME,
    SOA,
    SRV,
    PTR,
}

impl From<RecordType> for ProtoRecordType {
    fn from(record_type: RecordType) -> Self {
        match record_type {
            RecordType::A => ProtoRecordType::A,
            RecordType::AAAA => ProtoRecordType::AAAA,
            RecordType::MX => ProtoRecordType::MX,
            RecordType::TXT => ProtoRecordType::TXT,
            RecordType::NS => ProtoRecordType::NS,
            RecordType::CNAME => ProtoRecordType::CNAME,
            RecordType::SOA => ProtoRecordType::SOA,
            RecordType::SRV => ProtoRecordType::SRV,
            RecordType::PTR => ProtoRecordType::PTR,
        }
    }
}

/// Result of querying one record type for one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordQueryOutcome {
    /// Formatted record values, in answer order.
    Success(Vec<String>),
    /// Why the query failed.
    Failure(String),
}

impl RecordQueryOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RecordQueryOutcome::Success(_))
    }

    /// The values on success, `None` on failure.
    pub fn values(&self) -> Option<&[String]> {
        match self {
            RecordQueryOutcome::Success(values) => Some(values),
            RecordQueryOutcome::Failure(_) => None,
        }
    }
}

/// Outcomes for every [`RecordType`] of one domain.
///
/// Built only through [`DomainRecordSet::from_fn`] or `FromIterator`, both of
/// which fill in every type, so lookups by type always succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainRecordSet {
    outcomes: BTreeMap<RecordType, RecordQueryOutcome>,
}

impl DomainRecordSet {
    /// Builds a set by evaluating `f` for every record type.
    pub fn from_fn(mut f: impl FnMut(RecordType) -> RecordQueryOutcome) -> Self {
        Self {
            outcomes: RecordType::iter().map(|rt| (rt, f(rt))).collect(),
        }
    }

    pub fn get(&self, record_type: RecordType) -> &RecordQueryOutcome {
        // from_fn/from_iter populate every key
        &self.outcomes[&record_type]
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Iterates outcomes in `RecordType` order.
    pub fn iter(&self) -> impl Iterator<Item = (RecordType, &RecordQueryOutcome)> {
        self.outcomes.iter().map(|(rt, outcome)| (*rt, outcome))
    }

    /// Nameserver hostnames from the NS outcome; empty when the NS query failed.
    pub fn nameservers(&self) -> Vec<String> {
        self.get(RecordType::NS)
            .values()
            .map(<[String]>::to_vec)
            .unwrap_or_default()
    }
}

impl FromIterator<(RecordType, RecordQueryOutcome)> for DomainRecordSet {
    /// Types missing from the iterator are recorded as failures.
    fn from_iter<I: IntoIterator<Item = (RecordType, RecordQueryOutcome)>>(iter: I) -> Self {
        let mut given: BTreeMap<_, _> = iter.into_iter().collect();
        Self::from_fn(|rt| {
            given
                .remove(&rt)
                .unwrap_or_else(|| RecordQueryOutcome::Failure("not queried".to_string()))
        })
    }
}
