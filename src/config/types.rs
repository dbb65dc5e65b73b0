//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_LOG_FILE, DEFAULT_MAX_CONCURRENCY, DEFAULT_REPORT_OUT, DEFAULT_SMTP_PORT,
    DNS_TIMEOUT_SECS, ZONE_TRANSFER_TIMEOUT_SECS,
};
use crate::report::ReportRenderer;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: `<timestamp> - <LEVEL> - <message>` lines (colored on a terminal)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Report file format selectable on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Standalone HTML page
    Html,
    /// Excel workbook
    Xlsx,
}

/// Where the domains to scan come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanTarget {
    /// A single domain given on the command line.
    Domain(String),
    /// A newline-delimited inventory file.
    Inventory(PathBuf),
}

/// SMTP settings for exposure alerts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertConfig {
    /// SMTP relay host
    pub smtp_server: String,
    /// SMTP relay port (STARTTLS)
    pub smtp_port: u16,
    /// SMTP login user
    pub smtp_user: Option<String>,
    /// SMTP login password
    pub smtp_pass: Option<String>,
    /// Sender address; falls back to the SMTP user
    pub from_email: Option<String>,
    /// Recipient address
    pub to_email: String,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without going through `Opt`.
///
/// # Examples
///
/// ```no_run
/// use dns_audit::config::ScanTarget;
/// use dns_audit::Config;
///
/// let config = Config {
///     target: ScanTarget::Domain("example.com".to_string()),
///     zone_transfer: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Domain or inventory to scan
    pub target: ScanTarget,

    /// Probe every nameserver for an open zone transfer
    pub zone_transfer: bool,

    /// Maximum domains scanned concurrently
    pub max_concurrency: usize,

    /// Per-query DNS timeout in seconds
    pub dns_timeout_seconds: u64,

    /// Per-nameserver zone transfer timeout in seconds
    pub zone_transfer_timeout_seconds: u64,

    /// Report renderer to run after the scan
    pub report: ReportRenderer,

    /// Report output path
    pub report_out: PathBuf,

    /// Exposure alert delivery, if configured
    pub alert: Option<AlertConfig>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Append-only log file
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: ScanTarget::Inventory(PathBuf::from("domains.txt")),
            zone_transfer: false,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            dns_timeout_seconds: DNS_TIMEOUT_SECS,
            zone_transfer_timeout_seconds: ZONE_TRANSFER_TIMEOUT_SECS,
            report: ReportRenderer::None,
            report_out: PathBuf::from(DEFAULT_REPORT_OUT),
            alert: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

/// Command-line options.
///
/// Exactly one of the positional `domain` or `--inventory` must be given; clap
/// rejects the invocation otherwise.
///
/// # Examples
///
/// ```bash
/// # Single domain, records only
/// dns_audit example.com
///
/// # Inventory with zone transfer probing and an HTML report
/// dns_audit --inventory domains.txt --zone-transfer --report html --report-out out.html
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "dns_audit",
    about = "Audits DNS records and zone transfer exposure for a set of domains."
)]
#[command(group(
    ArgGroup::new("target")
        .required(true)
        .args(["domain", "inventory"])
))]
pub struct Opt {
    /// Target domain
    pub domain: Option<String>,

    /// Path to file with domains list (one per line)
    #[arg(long, value_parser)]
    pub inventory: Option<PathBuf>,

    /// Probe each nameserver for an open zone transfer (AXFR)
    #[arg(long)]
    pub zone_transfer: bool,

    /// Maximum domains scanned concurrently
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Per-query DNS timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    pub dns_timeout_seconds: u64,

    /// Per-nameserver zone transfer timeout in seconds
    #[arg(long, default_value_t = ZONE_TRANSFER_TIMEOUT_SECS)]
    pub zone_transfer_timeout_seconds: u64,

    /// Generate a report: html|xlsx
    #[arg(long, value_enum)]
    pub report: Option<ReportFormat>,

    /// Report output path
    #[arg(long, value_parser, default_value = DEFAULT_REPORT_OUT)]
    pub report_out: PathBuf,

    /// Send an email alert when a zone transfer is allowed
    #[arg(long)]
    pub alert_email: bool,

    /// SMTP relay host
    #[arg(long)]
    pub smtp_server: Option<String>,

    /// SMTP relay port
    #[arg(long, default_value_t = DEFAULT_SMTP_PORT)]
    pub smtp_port: u16,

    /// SMTP login user
    #[arg(long)]
    pub smtp_user: Option<String>,

    /// SMTP login password
    #[arg(long)]
    pub smtp_pass: Option<String>,

    /// Alert sender address (defaults to --smtp-user)
    #[arg(long)]
    pub from_email: Option<String>,

    /// Alert recipient address
    #[arg(long)]
    pub to_email: Option<String>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Append-only log file, or `-` for colored output on stderr
    #[arg(long, value_parser, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,
}

impl Opt {
    /// True when `--alert-email` was passed but the SMTP server or recipient is missing.
    pub fn alert_incomplete(&self) -> bool {
        self.alert_email && (self.smtp_server.is_none() || self.to_email.is_none())
    }

    fn alert_config(&self) -> Option<AlertConfig> {
        if !self.alert_email {
            return None;
        }
        Some(AlertConfig {
            smtp_server: self.smtp_server.clone()?,
            smtp_port: self.smtp_port,
            smtp_user: self.smtp_user.clone(),
            smtp_pass: self.smtp_pass.clone(),
            from_email: self.from_email.clone(),
            to_email: self.to_email.clone()?,
        })
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        let alert = opt.alert_config();
        // The argument group guarantees one of the two is present.
        let target = match (opt.domain, opt.inventory) {
            (_, Some(path)) => ScanTarget::Inventory(path),
            (Some(domain), None) => ScanTarget::Domain(domain),
            (None, None) => ScanTarget::Domain(String::new()),
        };
        Self {
            target,
            zone_transfer: opt.zone_transfer,
            max_concurrency: opt.max_concurrency,
            dns_timeout_seconds: opt.dns_timeout_seconds,
            zone_transfer_timeout_seconds: opt.zone_transfer_timeout_seconds,
            report: ReportRenderer::from(opt.report),
            report_out: opt.report_out,
            alert,
            log_level: opt.log_level,
            log_format: opt.log_format,
            log_file: opt.log_file,
        }
    }
}
