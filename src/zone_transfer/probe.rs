//! Nameserver probing.

use std::time::Duration;

use log::{info, warn};

use super::client::ZoneTransfer;
use super::types::ZoneTransferResult;

/// Attempts a zone transfer of `domain` from `nameserver`.
///
/// # Returns
///
/// - `Exposed` when the nameserver returned records (logged as a warning)
/// - `Protected` when the transfer was refused, timed out, or failed in transit
/// - `ProbeFailed` when the nameserver could not even be addressed
pub async fn probe_zone_transfer<X: ZoneTransfer>(
    client: &X,
    domain: &str,
    nameserver: &str,
    timeout: Duration,
) -> ZoneTransferResult {
    match tokio::time::timeout(timeout, client.transfer(nameserver, domain)).await {
        Ok(Ok(lines)) if !lines.is_empty() => {
            warn!(
                "Zone transfer allowed on {nameserver} for {domain} ({} records)",
                lines.len()
            );
            ZoneTransferResult::Exposed(lines)
        }
        Ok(Ok(_)) => {
            info!("Zone transfer denied on {nameserver} for {domain}: empty transfer");
            ZoneTransferResult::Protected
        }
        Ok(Err(e)) if e.is_setup() => {
            warn!("Zone transfer probe failed on {nameserver} for {domain}: {e}");
            ZoneTransferResult::ProbeFailed(e.to_string())
        }
        Ok(Err(e)) => {
            info!("Zone transfer denied on {nameserver} for {domain}: {e}");
            ZoneTransferResult::Protected
        }
        Err(_) => {
            info!(
                "Zone transfer denied on {nameserver} for {domain}: timed out after {}s",
                timeout.as_secs_f64()
            );
            ZoneTransferResult::Protected
        }
    }
}
