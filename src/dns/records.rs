//! TXT record queries.
//!
//! This module provides the [`TxtResolver`] seam used by the posture checker,
//! its production implementation on top of `hickory-resolver`, and a
//! fixed-answer implementation for offline runs and tests.

use std::collections::HashMap;

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

/// Source of TXT records for a DNS name.
///
/// Implementations never fail: any lookup problem is reported as an empty
/// list, which callers interpret as "no record found".
#[allow(async_fn_in_trait)]
pub trait TxtResolver {
    /// Returns all TXT records published at `name`.
    async fn lookup_txt(&self, name: &str) -> Vec<String>;
}

/// Queries TXT (text) records for a DNS name.
///
/// Each record's character-strings are joined with a single space, so a
/// record published as `"v=spf1" "include:example.net" "-all"` is returned
/// as `v=spf1 include:example.net -all`.
///
/// # Returns
///
/// A vector of TXT record strings. NXDOMAIN and "no records" answers yield
/// an empty vector.
///
/// # Errors
///
/// Returns the resolver error for every other failure (timeouts, unreachable
/// or refusing nameservers).
pub async fn lookup_txt_records(
    name: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Vec<String>, ResolveError> {
    match resolver.lookup(name, RecordType::TXT).await {
        Ok(lookup) => {
            let txt_records: Vec<String> = lookup
                .iter()
                .filter_map(|rdata| {
                    if let RData::TXT(txt) = rdata {
                        Some(
                            txt.iter()
                                .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                                .collect::<Vec<String>>()
                                .join(" "),
                        )
                    } else {
                        None
                    }
                })
                .collect();
            Ok(txt_records)
        }
        Err(e) => match e.kind() {
            ResolveErrorKind::NoRecordsFound { response_code, .. } => {
                if *response_code == ResponseCode::NXDomain {
                    log::debug!("{name} does not exist (NXDOMAIN)");
                } else {
                    log::debug!("No TXT records at {name}");
                }
                Ok(Vec::new())
            }
            _ => Err(e),
        },
    }
}

impl TxtResolver for TokioAsyncResolver {
    async fn lookup_txt(&self, name: &str) -> Vec<String> {
        match lookup_txt_records(name, self).await {
            Ok(records) => records,
            Err(e) => {
                let error_msg = e.to_string();
                if error_msg.contains("timeout") || error_msg.contains("timed out") {
                    log::warn!("TXT record lookup timed out for {name}: {e}");
                } else {
                    log::warn!("Failed to lookup TXT records for {name}: {e}");
                }
                Vec::new()
            }
        }
    }
}

/// A resolver answering from a fixed table of TXT records.
///
/// Names are matched case-insensitively and without a trailing dot; unknown
/// names have no records.
///
/// # Example
///
/// ```
/// use ir_toolkit::dns::{StaticTxtResolver, TxtResolver};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let resolver = StaticTxtResolver::new()
///     .with_record("_dmarc.example.com", "v=DMARC1; p=reject");
/// assert_eq!(resolver.lookup_txt("_DMARC.example.com.").await.len(), 1);
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticTxtResolver {
    records: HashMap<String, Vec<String>>,
}

impl StaticTxtResolver {
    /// Creates a resolver with no records.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one TXT record at `name`, keeping any earlier records there.
    pub fn with_record(mut self, name: &str, record: &str) -> Self {
        self.records
            .entry(normalize_name(name))
            .or_default()
            .push(record.to_string());
        self
    }
}

impl TxtResolver for StaticTxtResolver {
    async fn lookup_txt(&self, name: &str) -> Vec<String> {
        self.records
            .get(&normalize_name(name))
            .cloned()
            .unwrap_or_default()
    }
}

fn normalize_name(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}
