//! CSV export functionality.
//!
//! Exports posture results to CSV: one header row with the field names of
//! [`DomainEmailPosture`], then one row per domain.

use anyhow::{Context, Result};
use csv::Writer;
use std::io::Write;
use std::path::Path;

use crate::posture::DomainEmailPosture;

/// Exports posture results to a CSV file.
///
/// # Arguments
///
/// * `results` - Posture records, written in the given order
/// * `path` - Output file path (created or truncated)
///
/// # Returns
///
/// Returns the number of records exported, or an error if export fails.
pub fn export_posture_csv(results: &[DomainEmailPosture], path: &Path) -> Result<usize> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let count = write_posture_csv(results, file)
        .with_context(|| format!("Failed to write CSV report: {}", path.display()))?;
    log::info!("Exported {} record(s) to {}", count, path.display());
    Ok(count)
}

/// Writes posture results as CSV to any writer.
///
/// The header row is derived from the record's field names, so it is only
/// emitted when there is at least one record.
pub fn write_posture_csv<W: Write>(results: &[DomainEmailPosture], writer: W) -> Result<usize> {
    let mut writer = Writer::from_writer(writer);
    let mut record_count = 0;
    for result in results {
        writer.serialize(result)?;
        record_count += 1;
    }
    writer.flush()?;
    Ok(record_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posture(domain: &str, notes: &str) -> DomainEmailPosture {
        DomainEmailPosture {
            domain: domain.to_string(),
            spf_present: true,
            spf_record: "v=spf1 include:example.net -all".to_string(),
            spf_assessment: "Restrictive policy (-all).".to_string(),
            dmarc_present: true,
            dmarc_record: "v=DMARC1; p=reject".to_string(),
            dmarc_policy: "reject".to_string(),
            dmarc_assessment: "Strong enforcement policy (p=reject).".to_string(),
            dkim_checked: false,
            dkim_selector: String::new(),
            dkim_present: false,
            dkim_record: String::new(),
            notes: notes.to_string(),
        }
    }

    #[test]
    fn test_write_posture_csv_header_and_rows() {
        let mut buf = Vec::new();
        let count = write_posture_csv(
            &[posture("a.example", ""), posture("b.example", "SPF missing.")],
            &mut buf,
        )
        .expect("Should write CSV");
        assert_eq!(count, 2);

        let text = String::from_utf8(buf).expect("UTF-8 output");
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some(
                "domain,spf_present,spf_record,spf_assessment,dmarc_present,dmarc_record,\
                 dmarc_policy,dmarc_assessment,dkim_checked,dkim_selector,dkim_present,\
                 dkim_record,notes"
            )
        );
        let first = lines.next().expect("first row");
        assert!(first.starts_with("a.example,True,v=spf1 include:example.net -all,"));
        // Semicolons need no quoting, but the DMARC record round-trips intact
        assert!(first.contains(",v=DMARC1; p=reject,reject,"));
        assert!(lines.next().expect("second row").ends_with(",SPF missing."));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_write_posture_csv_quotes_commas() {
        let mut buf = Vec::new();
        write_posture_csv(&[posture("a.example", "SPF missing, DMARC weak")], &mut buf)
            .expect("Should write CSV");
        let text = String::from_utf8(buf).expect("UTF-8 output");
        assert!(text.contains("\"SPF missing, DMARC weak\""));
    }

    #[test]
    fn test_export_posture_csv_to_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("report.csv");
        let count = export_posture_csv(&[posture("a.example", "")], &path).expect("Should export");
        assert_eq!(count, 1);

        let mut reader = csv::Reader::from_path(&path).expect("Readable CSV");
        let headers = reader.headers().expect("Header row").clone();
        assert_eq!(headers.len(), 13);
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "a.example");
        assert_eq!(&rows[0][1], "True");
        assert_eq!(&rows[0][6], "reject");
        assert_eq!(&rows[0][8], "False");
        assert_eq!(&rows[0][10], "False");
    }

    #[test]
    fn test_export_posture_csv_bad_path() {
        let result = export_posture_csv(
            &[posture("a.example", "")],
            Path::new("/nonexistent-dir/report.csv"),
        );
        assert!(result.is_err());
    }
}
