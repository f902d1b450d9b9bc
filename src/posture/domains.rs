//! Domain list loading and validation.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use hickory_resolver::Name;
use log::debug;

use crate::error_handling::PostureError;

/// Collects the domains to check from `--domain` values and an optional file.
///
/// File lines are trimmed; blank lines and lines starting with `#` are
/// skipped. The combined list is lower-cased, de-duplicated and sorted.
///
/// # Errors
///
/// Returns `PostureError::DomainList` if the file cannot be read.
pub fn load_domains(domains: &[String], input: Option<&Path>) -> Result<Vec<String>, PostureError> {
    let mut collected: Vec<String> = domains.to_vec();

    if let Some(path) = input {
        let content = fs::read_to_string(path).map_err(|source| PostureError::DomainList {
            path: path.to_path_buf(),
            source,
        })?;
        let before = collected.len();
        collected.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_string),
        );
        debug!(
            "Read {} domain(s) from {}",
            collected.len() - before,
            path.display()
        );
    }

    let cleaned: BTreeSet<String> = collected
        .iter()
        .map(|d| d.trim())
        .filter(|d| !d.is_empty())
        .map(str::to_lowercase)
        .collect();

    Ok(cleaned.into_iter().collect())
}

/// Checks that `domain` is a syntactically valid DNS name.
///
/// Parsing is delegated to hickory's [`Name::from_utf8`], so internationalised
/// names are accepted and converted to their punycode form. Service labels
/// such as `_dmarc` are allowed. A single trailing dot is accepted; the empty
/// name and the bare root are not.
///
/// # Errors
///
/// Returns `PostureError::InvalidDomain` with hickory's parse error as the
/// reason.
pub fn validate_domain(domain: &str) -> Result<(), PostureError> {
    let invalid = |reason: String| PostureError::InvalidDomain {
        domain: domain.to_string(),
        reason,
    };

    if domain.strip_suffix('.').unwrap_or(domain).is_empty() {
        return Err(invalid("empty name".to_string()));
    }

    let name = Name::from_utf8(domain).map_err(|e| invalid(e.to_string()))?;
    debug!("{domain} parses as {}", name.to_ascii());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_domains_dedup_sort_lowercase() {
        let domains = vec![
            "Example.COM".to_string(),
            "b.example".to_string(),
            "example.com".to_string(),
            "  ".to_string(),
        ];
        let loaded = load_domains(&domains, None).expect("Should load");
        assert_eq!(loaded, vec!["b.example", "example.com"]);
    }

    #[test]
    fn test_load_domains_from_file_skips_comments_and_blanks() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "# Production domains").unwrap();
        writeln!(file, "example.org").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "   ").unwrap();
        writeln!(file, "  # indented comment").unwrap();
        writeln!(file, "  Example.net  ").unwrap();

        let loaded =
            load_domains(&["example.com".to_string()], Some(file.path())).expect("Should load");
        assert_eq!(loaded, vec!["example.com", "example.net", "example.org"]);
    }

    #[test]
    fn test_load_domains_missing_file() {
        let result = load_domains(&[], Some(Path::new("/nonexistent/domains.txt")));
        assert!(matches!(result, Err(PostureError::DomainList { .. })));
    }

    #[test]
    fn test_validate_domain_accepts_common_names() {
        for name in [
            "example.com",
            "example.com.",
            "mail-1.example.co.uk",
            "_dmarc.example.com",
            "localhost",
            "bücher.de",
            "xn--bcher-kva.de",
            "例え.jp",
        ] {
            assert!(validate_domain(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn test_validate_domain_reports_reason() {
        let err = validate_domain("spaces in.example").expect_err("Should be rejected");
        let PostureError::InvalidDomain { domain, reason } = err else {
            panic!("Unexpected error variant");
        };
        assert_eq!(domain, "spaces in.example");
        assert!(!reason.is_empty());
    }

    #[test]
    fn test_validate_domain_rejects_malformed_names() {
        let long_label = format!("{}.com", "a".repeat(64));
        let long_name = vec!["abcdefghi"; 26].join(".");
        for name in [
            "",
            ".",
            "bad..example",
            "-leading.example",
            "spaces in.example",
            "under/slash.example",
            long_label.as_str(),
            long_name.as_str(),
        ] {
            assert!(
                matches!(
                    validate_domain(name),
                    Err(PostureError::InvalidDomain { .. })
                ),
                "{name:?} should be rejected"
            );
        }
    }
}
