//! Tests that every omitted domain leaves an error line in the log.
//!
//! This file is its own test binary, so it can install a capturing `log` backend
//! without clashing with the env_logger installed by the library's unit tests.

mod helpers;

use std::sync::{Arc, Mutex, OnceLock};

use dns_audit::scan::{scan_all, DomainScanner, ScanOptions};
use log::{Level, LevelFilter, Log, Metadata, Record};

use helpers::{OpenNameservers, TableLookup};

struct CapturingLogger {
    lines: Mutex<Vec<(Level, String)>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

fn capture() -> &'static CapturingLogger {
    static LOGGER: OnceLock<&'static CapturingLogger> = OnceLock::new();
    LOGGER.get_or_init(|| {
        let logger: &'static CapturingLogger = Box::leak(Box::new(CapturingLogger {
            lines: Mutex::new(Vec::new()),
        }));
        log::set_logger(logger).expect("no other logger in this test binary");
        log::set_max_level(LevelFilter::Trace);
        logger
    })
}

fn error_lines_mentioning(logger: &CapturingLogger, needle: &str) -> Vec<String> {
    logger
        .lines
        .lock()
        .expect("log capture poisoned")
        .iter()
        .filter(|(level, line)| *level == Level::Error && line.contains(needle))
        .map(|(_, line)| line.clone())
        .collect()
}

#[tokio::test]
async fn test_each_omitted_domain_is_logged_once() {
    let logger = capture();
    let lookup = TableLookup::new()
        .a("fine.example", "192.0.2.1")
        .panicking_on("broken1.example")
        .panicking_on("broken2.example");
    let scanner = Arc::new(DomainScanner::new(lookup, OpenNameservers::new()));

    let report = scan_all(
        scanner,
        ["fine.example", "broken1.example", "broken2.example"],
        ScanOptions::default(),
        2,
    )
    .await;

    assert_eq!(report.len(), 1);
    assert_eq!(report.omitted().len(), 2);
    for domain in ["broken1.example", "broken2.example"] {
        let lines = error_lines_mentioning(logger, &format!("Error analyzing {domain}:"));
        assert_eq!(lines.len(), 1, "expected one error line for {domain}: {lines:?}");
        assert!(lines[0].contains("lookup table cannot serve"));
    }
    assert!(error_lines_mentioning(logger, "Error analyzing fine.example").is_empty());
}
