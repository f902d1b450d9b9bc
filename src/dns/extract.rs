//! DNS record extraction utilities.
//!
//! This module provides functions to pick the authoritative SPF, DMARC and
//! DKIM record out of the TXT records published at a name.

use crate::config::{DKIM_VERSION_TAG, DMARC_PREFIX, SPF_PREFIX};

/// Extracts SPF record from TXT records.
///
/// SPF records start with "v=spf1" (case-insensitive).
///
/// # Returns
///
/// The first SPF record found, trimmed, or `None` if no SPF record exists.
pub fn extract_spf_record(txt_records: &[String]) -> Option<String> {
    first_with_prefix(txt_records, SPF_PREFIX)
}

/// Extracts DMARC record from TXT records.
///
/// DMARC records live at `_dmarc.<domain>` and start with "v=DMARC1"
/// (case-insensitive).
///
/// # Returns
///
/// The first DMARC record found, trimmed, or `None` if no DMARC record exists.
pub fn extract_dmarc_record(txt_records: &[String]) -> Option<String> {
    first_with_prefix(txt_records, DMARC_PREFIX)
}

/// Extracts the DKIM key record from the TXT records at a selector name.
///
/// Prefers the first record carrying a `v=DKIM1` tag. The version tag is
/// optional in DKIM, so when no record carries it the first record at the
/// name is taken as the key record. This can misclassify an unrelated TXT
/// record published at the same name.
pub fn extract_dkim_record(txt_records: &[String]) -> Option<String> {
    txt_records
        .iter()
        .find(|txt| txt.to_ascii_lowercase().contains(DKIM_VERSION_TAG))
        .or_else(|| txt_records.first())
        .cloned()
}

fn first_with_prefix(txt_records: &[String], prefix: &str) -> Option<String> {
    txt_records
        .iter()
        .map(|txt| txt.trim())
        .find(|txt| txt.to_ascii_lowercase().starts_with(prefix))
        .map(str::to_string)
}
