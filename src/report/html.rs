//! HTML report.

use std::fmt::Write;

use crate::dns::RecordQueryOutcome;
use crate::scan::{DomainScanResult, ScanReport};
use crate::zone_transfer::ZoneTransferResult;

const STYLE: &str = "body{font-family:sans-serif;margin:2em}\
table{border-collapse:collapse;margin-bottom:1.5em}\
th,td{border:1px solid #ccc;padding:4px 8px;text-align:left;vertical-align:top}\
th{background:#f0f0f0}\
.exposed{color:#b00020;font-weight:bold}\
.error{color:#777}";

/// Renders the whole report as a standalone page, domains in name order.
pub fn render_html(report: &ScanReport) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>DNS Audit Report</title>\n");
    let _ = writeln!(html, "<style>{STYLE}</style>");
    html.push_str("</head>\n<body>\n<h1>DNS Audit Report</h1>\n");
    let _ = writeln!(
        html,
        "<p>Generated {} for {} domain(s).</p>",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        report.len()
    );

    for (_, result) in report.iter() {
        render_domain(&mut html, result);
    }

    if !report.omitted().is_empty() {
        html.push_str("<h2>Not scanned</h2>\n<table>\n<tr><th>Domain</th><th>Reason</th></tr>\n");
        for (domain, reason) in report.omitted() {
            let _ = writeln!(
                html,
                "<tr><td>{}</td><td>{}</td></tr>",
                escape_html(domain),
                escape_html(reason)
            );
        }
        html.push_str("</table>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_domain(html: &mut String, result: &DomainScanResult) {
    let _ = writeln!(html, "<h2>{}</h2>", escape_html(&result.domain));
    html.push_str("<table>\n<tr><th>Type</th><th>Value</th></tr>\n");
    for (record_type, outcome) in result.records.iter() {
        let value = match outcome {
            RecordQueryOutcome::Success(values) => values
                .iter()
                .map(|v| escape_html(v))
                .collect::<Vec<_>>()
                .join("<br>"),
            RecordQueryOutcome::Failure(reason) => {
                format!("<span class=\"error\">Error: {}</span>", escape_html(reason))
            }
        };
        let _ = writeln!(html, "<tr><td>{record_type}</td><td>{value}</td></tr>");
    }
    html.push_str("</table>\n");

    if result.transfers.is_empty() {
        return;
    }
    html.push_str("<table>\n<tr><th>Nameserver</th><th>Zone transfer</th></tr>\n");
    for (nameserver, transfer) in &result.transfers {
        let cell = match transfer {
            ZoneTransferResult::Exposed(lines) => format!(
                "<span class=\"exposed\">{} ({} records)</span>",
                transfer.label(),
                lines.len()
            ),
            ZoneTransferResult::Protected => transfer.label().to_string(),
            ZoneTransferResult::ProbeFailed(reason) => {
                format!("{}: {}", transfer.label(), escape_html(reason))
            }
        };
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{cell}</td></tr>",
            escape_html(nameserver)
        );
    }
    html.push_str("</table>\n");
}

pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
