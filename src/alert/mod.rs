//! Zone transfer exposure alerting.
//!
//! [`decide_alert`] inspects a finished `ScanReport` and decides whether there is
//! anything to alert on; [`send_alert`] delivers the message over SMTP. The
//! decision reads the transfers recorded during the scan and never probes again.

mod mailer;

pub use mailer::send_alert;

use crate::config::ALERT_SUBJECT;
use crate::scan::ScanReport;

/// An alert ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertMessage {
    pub subject: String,
    /// One line per exposed (domain, nameserver) pair
    pub lines: Vec<String>,
}

impl AlertMessage {
    pub fn body(&self) -> String {
        self.lines.join("\n")
    }
}

/// Builds an alert listing every exposed zone transfer, or `None` if there are none.
///
/// Lines are ordered by domain, then nameserver.
pub fn decide_alert(report: &ScanReport) -> Option<AlertMessage> {
    let lines: Vec<String> = report
        .iter()
        .flat_map(|(domain, result)| {
            result
                .exposed_nameservers()
                .map(move |nameserver| alert_line(domain, nameserver))
        })
        .collect();

    if lines.is_empty() {
        return None;
    }
    Some(AlertMessage {
        subject: ALERT_SUBJECT.to_string(),
        lines,
    })
}

fn alert_line(domain: &str, nameserver: &str) -> String {
    format!("[ALERT] {domain} allows zone transfer on {nameserver}")
}
