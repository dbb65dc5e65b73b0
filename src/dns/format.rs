//! Answer formatting per record type.

use hickory_resolver::proto::rr::RData;

use super::types::{RecordQueryOutcome, RecordType};

/// Formats the answers of a `record_type` query into display strings.
///
/// Only answers of the queried type are kept; a CNAME chain returned alongside an
/// A answer, for instance, is skipped. SOA yields `[mname, rname, serial]` from the
/// first SOA answer, and an answer without one is a failure.
pub fn format_answers(record_type: RecordType, answers: &[RData]) -> RecordQueryOutcome {
    if record_type == RecordType::SOA {
        return answers
            .iter()
            .find_map(|rdata| match rdata {
                RData::SOA(soa) => Some(vec![
                    soa.mname().to_utf8(),
                    soa.rname().to_utf8(),
                    soa.serial().to_string(),
                ]),
                _ => None,
            })
            .map(RecordQueryOutcome::Success)
            .unwrap_or_else(|| RecordQueryOutcome::Failure("no SOA record in answer".to_string()));
    }

    let values = answers
        .iter()
        .filter_map(|rdata| format_rdata(record_type, rdata))
        .collect();
    RecordQueryOutcome::Success(values)
}

fn format_rdata(record_type: RecordType, rdata: &RData) -> Option<String> {
    match (record_type, rdata) {
        (RecordType::A, RData::A(a)) => Some(a.to_string()),
        (RecordType::AAAA, RData::AAAA(aaaa)) => Some(aaaa.to_string()),
        // Preference is not part of the output
        (RecordType::MX, RData::MX(mx)) => Some(mx.exchange().to_utf8()),
        (RecordType::TXT, RData::TXT(txt)) => Some(
            // A TXT record can hold several character-strings - join them
            txt.iter()
                .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                .collect::<Vec<String>>()
                .join(""),
        ),
        (RecordType::NS, RData::NS(ns)) => Some(ns.0.to_utf8()),
        (RecordType::CNAME, RData::CNAME(cname)) => Some(cname.0.to_utf8()),
        (RecordType::PTR, RData::PTR(ptr)) => Some(ptr.0.to_utf8()),
        (RecordType::SRV, RData::SRV(srv)) => Some(format!(
            "{} {} {} {}",
            srv.priority(),
            srv.weight(),
            srv.port(),
            srv.target().to_utf8()
        )),
        _ => None,
    }
}
