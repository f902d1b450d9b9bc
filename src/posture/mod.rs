//! Email authentication posture checks.
//!
//! For each domain this module looks up:
//! - the SPF record at `<domain>`
//! - the DMARC record at `_dmarc.<domain>`
//! - optionally the DKIM key at `<selector>._domainkey.<domain>`
//!
//! and turns what it finds into a [`DomainEmailPosture`]. Lookups run one
//! after another; a failed lookup reads as "no record found".

mod assess;
mod domains;
mod report;

use log::{debug, info};
use serde::{Serialize, Serializer};

use crate::config::{DKIM_LABEL, DMARC_LABEL};
use crate::dns::{extract_dkim_record, extract_dmarc_record, extract_spf_record, TxtResolver};
use crate::error_handling::PostureError;

// Re-export public API
pub use assess::{assess_dmarc, assess_spf, parse_dmarc_tags, DmarcAssessment, SpfAssessment};
pub use domains::{load_domains, validate_domain};
pub use report::render_human_report;

/// Email authentication posture of one domain.
///
/// Field order is the column order of the CSV export. Flags are written as
/// `True` / `False`, the same as in the console report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainEmailPosture {
    /// Domain that was checked
    pub domain: String,
    /// Whether an SPF record was found
    #[serde(serialize_with = "serialize_flag")]
    pub spf_present: bool,
    /// SPF record text (empty when absent)
    pub spf_record: String,
    /// Plain-language SPF assessment
    pub spf_assessment: String,
    /// Whether a DMARC record was found
    #[serde(serialize_with = "serialize_flag")]
    pub dmarc_present: bool,
    /// DMARC record text (empty when absent)
    pub dmarc_record: String,
    /// DMARC `p=` policy, `(not set)` if the tag is missing
    pub dmarc_policy: String,
    /// Plain-language DMARC assessment
    pub dmarc_assessment: String,
    /// Whether a DKIM selector was checked
    #[serde(serialize_with = "serialize_flag")]
    pub dkim_checked: bool,
    /// Selector that was checked (empty when none)
    pub dkim_selector: String,
    /// Whether a DKIM record was found for the selector
    #[serde(serialize_with = "serialize_flag")]
    pub dkim_present: bool,
    /// DKIM record text (empty when absent)
    pub dkim_record: String,
    /// Summary of missing or weak records
    pub notes: String,
}

/// Text form of a posture flag: `True` or `False`.
pub fn flag_label(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

fn serialize_flag<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(flag_label(*value))
}

struct DkimCheck {
    checked: bool,
    selector: String,
    present: bool,
    record: String,
}

/// Checks SPF, DMARC and optionally DKIM for a single domain.
///
/// An empty `dkim_selector` is treated as no selector.
///
/// # Errors
///
/// Returns `PostureError::InvalidDomain` if `domain` is not a valid DNS name.
/// DNS failures are never errors.
///
/// # Example
///
/// ```
/// use ir_toolkit::dns::StaticTxtResolver;
/// use ir_toolkit::posture::check_domain;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let resolver = StaticTxtResolver::new()
///     .with_record("example.com", "v=spf1 include:example.net -all")
///     .with_record("_dmarc.example.com", "v=DMARC1; p=reject; rua=mailto:d@example.com");
///
/// let posture = check_domain(&resolver, "example.com", None).await.unwrap();
/// assert!(posture.spf_present);
/// assert_eq!(posture.dmarc_policy, "reject");
/// assert!(posture.notes.is_empty());
/// # }
/// ```
pub async fn check_domain<R: TxtResolver>(
    resolver: &R,
    domain: &str,
    dkim_selector: Option<&str>,
) -> Result<DomainEmailPosture, PostureError> {
    validate_domain(domain)?;
    info!("Checking email authentication records for {domain}");

    let spf_txt = resolver.lookup_txt(domain).await;
    let spf = assess_spf(extract_spf_record(&spf_txt).as_deref());

    let dmarc_name = format!("{DMARC_LABEL}.{domain}");
    let dmarc_txt = resolver.lookup_txt(&dmarc_name).await;
    let dmarc = assess_dmarc(extract_dmarc_record(&dmarc_txt).as_deref());

    let dkim = check_dkim(resolver, domain, dkim_selector).await;

    let mut notes: Vec<String> = Vec::new();
    if !spf.present {
        notes.push("SPF missing.".to_string());
    }
    if !dmarc.present {
        notes.push("DMARC missing.".to_string());
    }
    if dmarc.present && dmarc.policy == "none" {
        notes.push("DMARC monitoring only (p=none).".to_string());
    }
    if dkim.checked && !dkim.present {
        notes.push(format!(
            "DKIM selector '{}' not found for this domain.",
            dkim.selector
        ));
    }

    Ok(DomainEmailPosture {
        domain: domain.to_string(),
        spf_present: spf.present,
        spf_record: spf.record,
        spf_assessment: spf.assessment,
        dmarc_present: dmarc.present,
        dmarc_record: dmarc.record,
        dmarc_policy: dmarc.policy,
        dmarc_assessment: dmarc.assessment,
        dkim_checked: dkim.checked,
        dkim_selector: dkim.selector,
        dkim_present: dkim.present,
        dkim_record: dkim.record,
        notes: notes.join(" "),
    })
}

async fn check_dkim<R: TxtResolver>(
    resolver: &R,
    domain: &str,
    selector: Option<&str>,
) -> DkimCheck {
    let Some(selector) = selector.map(str::trim).filter(|s| !s.is_empty()) else {
        return DkimCheck {
            checked: false,
            selector: String::new(),
            present: false,
            record: String::new(),
        };
    };

    let name = format!("{selector}.{DKIM_LABEL}.{domain}");
    let txt = resolver.lookup_txt(&name).await;
    let record = extract_dkim_record(&txt);
    debug!(
        "DKIM lookup at {name}: {}",
        if record.is_some() { "found" } else { "no record" }
    );

    DkimCheck {
        checked: true,
        selector: selector.to_string(),
        present: record.is_some(),
        record: record.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns::StaticTxtResolver;

    #[tokio::test]
    async fn test_check_domain_full_posture() {
        let resolver = StaticTxtResolver::new()
            .with_record("example.com", "google-site-verification=xyz")
            .with_record("example.com", "v=spf1 include:example.com -all")
            .with_record("_dmarc.example.com", "v=DMARC1; p=none; pct=50")
            .with_record("default._domainkey.example.com", "v=DKIM1; k=rsa; p=MIIB");

        let posture = check_domain(&resolver, "example.com", Some("default"))
            .await
            .expect("Valid domain");

        assert!(posture.spf_present);
        assert_eq!(posture.spf_record, "v=spf1 include:example.com -all");
        assert!(posture.spf_assessment.contains("Restrictive policy"));
        assert!(posture.spf_assessment.contains("include mechanisms"));

        assert!(posture.dmarc_present);
        assert_eq!(posture.dmarc_policy, "none");
        assert!(posture.dmarc_assessment.contains("Monitoring-only"));
        assert!(posture.dmarc_assessment.contains("pct=50"));

        assert!(posture.dkim_checked);
        assert_eq!(posture.dkim_selector, "default");
        assert!(posture.dkim_present);
        assert_eq!(posture.dkim_record, "v=DKIM1; k=rsa; p=MIIB");

        assert_eq!(posture.notes, "DMARC monitoring only (p=none).");
    }

    #[tokio::test]
    async fn test_check_domain_nothing_published() {
        let resolver = StaticTxtResolver::new();
        let posture = check_domain(&resolver, "bare.example", Some("s1"))
            .await
            .expect("Valid domain");

        assert!(!posture.spf_present);
        assert!(!posture.dmarc_present);
        assert_eq!(posture.dmarc_policy, "");
        assert!(posture.dkim_checked);
        assert!(!posture.dkim_present);
        assert_eq!(
            posture.notes,
            "SPF missing. DMARC missing. DKIM selector 's1' not found for this domain."
        );
    }

    #[tokio::test]
    async fn test_check_domain_without_selector() {
        let resolver = StaticTxtResolver::new()
            .with_record("example.org", "v=spf1 -all")
            .with_record("_dmarc.example.org", "v=DMARC1; p=reject; rua=mailto:r@example.org");

        for selector in [None, Some(""), Some("  ")] {
            let posture = check_domain(&resolver, "example.org", selector)
                .await
                .expect("Valid domain");
            assert!(!posture.dkim_checked);
            assert!(posture.dkim_selector.is_empty());
            assert!(!posture.dkim_present);
            assert!(posture.notes.is_empty());
        }
    }

    #[tokio::test]
    async fn test_check_domain_dkim_fallback_first_record() {
        let resolver = StaticTxtResolver::new()
            .with_record("sel._domainkey.example.net", "k=rsa; p=MIGf");
        let posture = check_domain(&resolver, "example.net", Some("sel"))
            .await
            .expect("Valid domain");
        assert!(posture.dkim_present);
        assert_eq!(posture.dkim_record, "k=rsa; p=MIGf");
    }

    #[tokio::test]
    async fn test_check_domain_spf_at_dmarc_name_is_ignored() {
        // Records are only recognised at their own names
        let resolver = StaticTxtResolver::new()
            .with_record("_dmarc.example.com", "v=spf1 -all")
            .with_record("example.com", "v=DMARC1; p=reject");
        let posture = check_domain(&resolver, "example.com", None)
            .await
            .expect("Valid domain");
        assert!(!posture.spf_present);
        assert!(!posture.dmarc_present);
    }

    #[tokio::test]
    async fn test_check_domain_invalid_name() {
        let resolver = StaticTxtResolver::new();
        let result = check_domain(&resolver, "not a domain", None).await;
        assert!(matches!(result, Err(PostureError::InvalidDomain { .. })));
    }

    #[tokio::test]
    async fn test_check_domain_internationalised_name() {
        let resolver = StaticTxtResolver::new()
            .with_record("bücher.de", "v=spf1 -all")
            .with_record("_dmarc.bücher.de", "v=DMARC1; p=quarantine");
        let posture = check_domain(&resolver, "bücher.de", None)
            .await
            .expect("Internationalised names are valid");
        assert_eq!(posture.domain, "bücher.de");
        assert!(posture.spf_present);
        assert_eq!(posture.spf_record, "v=spf1 -all");
        assert_eq!(posture.dmarc_policy, "quarantine");
    }
}
