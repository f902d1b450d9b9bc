//! DNS TXT record querying.
//!
//! This module provides DNS operations for the posture checker:
//! - Text record queries (TXT records) through the [`TxtResolver`] seam
//! - SPF/DMARC/DKIM record extraction from the returned TXT strings
//!
//! Lookups respect the system DNS configuration and never fail: every
//! resolver error degrades to "no records".

mod extract;
mod records;

// Re-export public API
pub use extract::{extract_dkim_record, extract_dmarc_record, extract_spf_record};
pub use records::{lookup_txt_records, StaticTxtResolver, TxtResolver};
