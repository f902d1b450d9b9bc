//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;
use log::{debug, warn};

use crate::config::DNS_ATTEMPTS;

/// Initializes the DNS resolver used for TXT lookups.
///
/// Uses the system resolver configuration (`/etc/resolv.conf` on Unix, the
/// registry on Windows) so results match what mail servers on the same host
/// would see. If the system configuration cannot be read, falls back to the
/// hickory default upstreams (Google Public DNS).
///
/// Timeouts and attempts are always overridden so a slow nameserver cannot
/// stall a long domain list.
pub fn init_resolver(timeout_secs: u64) -> TokioAsyncResolver {
    let (config, mut opts) = match hickory_resolver::system_conf::read_system_conf() {
        Ok((config, opts)) => {
            debug!(
                "Using system DNS configuration ({} nameserver(s))",
                config.name_servers().len()
            );
            (config, opts)
        }
        Err(e) => {
            warn!("Could not read system DNS configuration, using defaults: {e}");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };

    opts.timeout = Duration::from_secs(timeout_secs);
    opts.attempts = DNS_ATTEMPTS;
    // Names are always fully qualified; never append search domains
    opts.ndots = 0;

    TokioAsyncResolver::tokio(config, opts)
}
