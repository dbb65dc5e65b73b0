//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::config::DNS_ATTEMPTS;

/// Initializes the DNS resolver used for record lookups and nameserver addresses.
///
/// Uses the default upstream configuration (Google DNS). `timeout` is the budget
/// for a whole query; it is split across `DNS_ATTEMPTS` attempts so every attempt
/// can run before the caller's own timeout fires.
///
/// # Arguments
///
/// * `timeout` - Total per-query timeout
///
/// # Returns
///
/// A configured `TokioAsyncResolver` wrapped in `Arc` for sharing across tasks.
pub fn init_resolver(timeout: Duration) -> Arc<TokioAsyncResolver> {
    Arc::new(TokioAsyncResolver::tokio(
        ResolverConfig::default(),
        resolver_opts(timeout),
    ))
}

fn resolver_opts(timeout: Duration) -> ResolverOpts {
    let mut opts = ResolverOpts::default();
    opts.timeout = timeout / DNS_ATTEMPTS as u32;
    opts.attempts = DNS_ATTEMPTS;
    // Names are queried exactly as given, never with search domains appended
    opts.ndots = 0;
    opts
}
