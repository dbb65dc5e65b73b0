//! dns_audit library: DNS record and zone transfer auditing
//!
//! This library queries a fixed set of DNS record types for every domain in an
//! inventory, optionally probes each domain's nameservers for open zone transfers
//! (AXFR), and turns the findings into reports and alerts.
//!
//! # Example
//!
//! ```no_run
//! use dns_audit::config::ScanTarget;
//! use dns_audit::{run_scan, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     target: ScanTarget::Inventory(std::path::PathBuf::from("domains.txt")),
//!     zone_transfer: true,
//!     max_concurrency: 20,
//!     ..Default::default()
//! };
//!
//! let summary = run_scan(config).await?;
//! println!("Scanned {} domains, {} open zone transfer(s)",
//!          summary.domains_scanned, summary.exposures);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod alert;
pub mod config;
pub mod dns;
pub mod error_handling;
pub mod initialization;
pub mod inventory;
pub mod report;
pub mod scan;
pub mod zone_transfer;

#[cfg(test)]
mod test_support;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use run::{run_scan, RunSummary};
pub use scan::{DomainScanResult, ScanReport};

// Internal run module (wires inventory, scanner, report and alert together)
mod run {
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use anyhow::{Context, Result};
    use log::{error, info, warn};

    use crate::alert::{decide_alert, send_alert};
    use crate::config::{Config, ScanTarget};
    use crate::dns::HickoryLookup;
    use crate::error_handling::InputError;
    use crate::initialization::init_resolver;
    use crate::inventory::load_inventory;
    use crate::report::{render_report, ReportRenderer};
    use crate::scan::{normalize_domains, scan_all, DomainScanner, ScanOptions, ScanReport};
    use crate::zone_transfer::AxfrClient;

    /// Summary of a completed run.
    #[derive(Debug, Clone)]
    pub struct RunSummary {
        /// Unique domains requested after normalization
        pub domains_requested: usize,
        /// Domains present in the report
        pub domains_scanned: usize,
        /// Domains whose scan task failed
        pub domains_omitted: usize,
        /// Open zone transfers found (domain, nameserver pairs)
        pub exposures: usize,
        /// Log file the run wrote to
        pub log_file: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs a full audit with the provided configuration.
    ///
    /// Loads the target domains, scans them concurrently, then renders the
    /// configured report and sends an alert if any zone transfer was open. Report
    /// and alert failures are logged and do not fail the run.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The inventory file is missing or unreadable
    /// - A single-domain target is empty
    pub async fn run_scan(config: Config) -> Result<RunSummary> {
        let start = Instant::now();

        let domains = match &config.target {
            ScanTarget::Domain(domain) => {
                if domain.trim().is_empty() {
                    return Err(InputError::EmptyTarget.into());
                }
                vec![domain.clone()]
            }
            ScanTarget::Inventory(path) => load_inventory(path)
                .await
                .with_context(|| format!("Failed to load inventory {}", path.display()))?,
        };
        let domains_requested = normalize_domains(&domains).len();

        let resolver = init_resolver(Duration::from_secs(config.dns_timeout_seconds));
        let scanner = DomainScanner::new(
            HickoryLookup::new(Arc::clone(&resolver)),
            AxfrClient::new(resolver),
        )
        .with_query_timeout(Duration::from_secs(config.dns_timeout_seconds))
        .with_transfer_timeout(Duration::from_secs(config.zone_transfer_timeout_seconds));
        let options = ScanOptions {
            check_zone_transfer: config.zone_transfer,
        };

        let report = scan_all(Arc::new(scanner), &domains, options, config.max_concurrency).await;

        if config.report != ReportRenderer::None {
            if let Err(e) = render_report(config.report, &report, &config.report_out) {
                error!(
                    "Failed to write report {}: {}",
                    config.report_out.display(),
                    e
                );
            }
        }

        let exposures = deliver_alert(&config, &report).await;

        let elapsed_seconds = start.elapsed().as_secs_f64();
        info!(
            "Run finished in {:.1}s: {} scanned, {} omitted, {} open zone transfer(s)",
            elapsed_seconds,
            report.len(),
            report.omitted().len(),
            exposures
        );

        Ok(RunSummary {
            domains_requested,
            domains_scanned: report.len(),
            domains_omitted: report.omitted().len(),
            exposures,
            log_file: config.log_file,
            elapsed_seconds,
        })
    }

    /// Logs every exposure and mails them if alerting is configured.
    ///
    /// Returns the number of exposures found.
    async fn deliver_alert(config: &Config, report: &ScanReport) -> usize {
        let Some(message) = decide_alert(report) else {
            info!("No open zone transfers found");
            return 0;
        };
        for line in &message.lines {
            warn!("{line}");
        }

        if let Some(alert) = &config.alert {
            if let Err(e) = send_alert(alert, &message).await {
                error!("Failed to send alert email: {e}");
            }
        }
        message.lines.len()
    }
}
