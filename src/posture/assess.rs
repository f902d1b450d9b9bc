//! Plain-language assessment of SPF and DMARC records.
//!
//! The checks are deliberately shallow substring and tag matches; they flag
//! what an operator should look at, they do not evaluate the policy.

use std::collections::HashMap;

/// Outcome of assessing a domain's SPF record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpfAssessment {
    /// Whether an SPF record was found
    pub present: bool,
    /// The trimmed record, empty when absent
    pub record: String,
    /// Space-joined assessment sentences
    pub assessment: String,
}

/// Outcome of assessing a domain's DMARC record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DmarcAssessment {
    /// Whether a DMARC record was found
    pub present: bool,
    /// The trimmed record, empty when absent
    pub record: String,
    /// Lower-cased `p=` value, `(not set)` when the tag is missing, empty when absent
    pub policy: String,
    /// Space-joined assessment sentences
    pub assessment: String,
}

/// Assesses an SPF record.
///
/// The `all` mechanism is classified by the first match of ` -all`, ` ~all`,
/// then ` ?all` or any other occurrence of `all`. Include, IP and redirect
/// usage each add a sentence.
pub fn assess_spf(spf: Option<&str>) -> SpfAssessment {
    let Some(spf) = spf.filter(|s| !s.trim().is_empty()) else {
        return SpfAssessment {
            present: false,
            record: String::new(),
            assessment: "No SPF record found.".to_string(),
        };
    };

    let record = spf.trim();
    let lower = record.to_ascii_lowercase();
    let mut parts: Vec<&str> = Vec::new();

    if lower.contains(" -all") {
        parts.push("Restrictive policy (-all).");
    } else if lower.contains(" ~all") {
        parts.push("Soft fail policy (~all). Consider -all if mature.");
    } else if lower.contains(" ?all") || lower.contains("all") {
        parts.push("Permissive 'all' mechanism. Review necessity.");
    }

    if lower.contains("include:") {
        parts.push("Uses include mechanisms (check third-party senders).");
    }
    if lower.contains(" ip4:") || lower.contains(" ip6:") {
        parts.push("Direct IP mechanisms configured.");
    }
    if lower.contains(" redirect=") {
        parts.push("Uses redirect (advanced configuration).");
    }

    if parts.is_empty() {
        parts.push("SPF present but could not derive specific guidance.");
    }

    SpfAssessment {
        present: true,
        record: record.to_string(),
        assessment: parts.join(" "),
    }
}

/// Parses a DMARC record into its tags.
///
/// Parts are separated by `;`; each part is split on its first `=`. Keys are
/// trimmed and lower-cased, values trimmed. Parts without `=` are ignored and
/// a repeated key keeps its last value.
///
/// # Example
///
/// ```
/// use ir_toolkit::posture::parse_dmarc_tags;
///
/// let tags = parse_dmarc_tags("v=DMARC1; p=reject; rua=mailto:dmarc@example.com");
/// assert_eq!(tags.get("p").map(String::as_str), Some("reject"));
/// assert_eq!(tags.get("rua").map(String::as_str), Some("mailto:dmarc@example.com"));
/// ```
pub fn parse_dmarc_tags(record: &str) -> HashMap<String, String> {
    record
        .split(';')
        .filter_map(|part| part.trim().split_once('='))
        .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_string()))
        .collect()
}

/// Assesses a DMARC record.
///
/// Reports the enforcement level from `p=`, whether aggregate reporting
/// (`rua=`) is configured, and any `pct=` other than 100.
pub fn assess_dmarc(dmarc: Option<&str>) -> DmarcAssessment {
    let Some(dmarc) = dmarc.filter(|s| !s.trim().is_empty()) else {
        return DmarcAssessment {
            present: false,
            record: String::new(),
            policy: String::new(),
            assessment: "No DMARC record found.".to_string(),
        };
    };

    let record = dmarc.trim();
    let tags = parse_dmarc_tags(record);
    let policy = tags
        .get("p")
        .map(|p| p.to_ascii_lowercase())
        .unwrap_or_default();
    let pct = tags.get("pct").map(String::as_str).unwrap_or("100");
    let rua = tags.get("rua").map(String::as_str).unwrap_or("");

    let mut parts: Vec<String> = Vec::new();

    parts.push(
        match policy.as_str() {
            "none" => "Monitoring-only DMARC policy (p=none). Consider quarantine/reject.",
            "quarantine" => "Quarantine policy in place (p=quarantine).",
            "reject" => "Strong enforcement policy (p=reject).",
            _ => "DMARC policy missing or unrecognised; review required.",
        }
        .to_string(),
    );

    if rua.is_empty() {
        parts.push("No aggregate reporting address (rua) configured.".to_string());
    } else {
        parts.push("Aggregate reporting (rua) configured.".to_string());
    }

    if pct != "100" {
        parts.push(format!("DMARC applies to {pct}% of messages (pct={pct})."));
    }

    DmarcAssessment {
        present: true,
        record: record.to_string(),
        policy: if policy.is_empty() {
            "(not set)".to_string()
        } else {
            policy
        },
        assessment: parts.join(" "),
    }
}
