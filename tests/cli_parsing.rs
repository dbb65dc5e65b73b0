//! Tests for command-line option parsing.

use clap::Parser;
use dns_audit::config::{Opt, ReportFormat, ScanTarget};
use dns_audit::report::ReportRenderer;
use dns_audit::Config;
use std::path::PathBuf;

#[test]
fn test_target_is_required() {
    let err = Opt::try_parse_from(["dns_audit"]).expect_err("no target should fail");
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_domain_and_inventory_conflict() {
    let err = Opt::try_parse_from(["dns_audit", "example.com", "--inventory", "domains.txt"])
        .expect_err("both targets should fail");
    assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_defaults() {
    let opt = Opt::try_parse_from(["dns_audit", "example.com"]).expect("Should parse");
    assert_eq!(opt.domain.as_deref(), Some("example.com"));
    assert!(!opt.zone_transfer);
    assert_eq!(opt.max_concurrency, 10);
    assert_eq!(opt.dns_timeout_seconds, 5);
    assert_eq!(opt.zone_transfer_timeout_seconds, 5);
    assert_eq!(opt.report, None);
    assert_eq!(opt.report_out, PathBuf::from("report.html"));
    assert_eq!(opt.smtp_port, 587);
    assert_eq!(opt.log_file, PathBuf::from("dns_audit.log"));
    assert!(!opt.alert_incomplete());
}

#[test]
fn test_inventory_scan_options() {
    let opt = Opt::try_parse_from([
        "dns_audit",
        "--inventory",
        "domains.txt",
        "--zone-transfer",
        "--max-concurrency",
        "25",
        "--report",
        "html",
        "--report-out",
        "out.html",
        "--log-format",
        "json",
    ])
    .expect("Should parse inventory options");
    assert_eq!(opt.report, Some(ReportFormat::Html));

    let config = Config::from(opt);
    assert_eq!(
        config.target,
        ScanTarget::Inventory(PathBuf::from("domains.txt"))
    );
    assert!(config.zone_transfer);
    assert_eq!(config.max_concurrency, 25);
    assert_eq!(config.report, ReportRenderer::Html);
    assert_eq!(config.report_out, PathBuf::from("out.html"));
}

#[test]
fn test_invalid_report_format_rejected() {
    let result = Opt::try_parse_from(["dns_audit", "example.com", "--report", "pdf"]);
    assert!(result.is_err());
}

#[test]
fn test_alert_without_recipient_is_incomplete() {
    let opt = Opt::try_parse_from(["dns_audit", "example.com", "--alert-email"])
        .expect("Should parse");
    assert!(opt.alert_incomplete());
    assert!(Config::from(opt).alert.is_none());
}

#[test]
fn test_log_file_dash_logs_to_terminal() {
    use dns_audit::initialization::LogSink;

    let opt = Opt::try_parse_from(["dns_audit", "example.com", "--log-file", "-"])
        .expect("Should parse");
    assert_eq!(LogSink::from_path(&opt.log_file), LogSink::Stderr);

    let opt = Opt::try_parse_from(["dns_audit", "example.com"]).expect("Should parse");
    assert_eq!(
        LogSink::from_path(&opt.log_file),
        LogSink::File(PathBuf::from("dns_audit.log"))
    );
}
