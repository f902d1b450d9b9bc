//! Human-readable posture report.

use std::fmt::Write;

use super::{flag_label, DomainEmailPosture};
use crate::config::REPORT_WIDTH;

/// Renders the console report for a batch of posture results.
///
/// Each domain gets an SPF, DMARC and DKIM section followed by any notes.
/// An empty batch renders as a single "No domains to report." line.
pub fn render_human_report(results: &[DomainEmailPosture]) -> String {
    if results.is_empty() {
        return "No domains to report.\n".to_string();
    }

    let heavy = "=".repeat(REPORT_WIDTH);
    let light = "-".repeat(REPORT_WIDTH);
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "{heavy}");
    let _ = writeln!(out, "Email Authentication Posture Report (SPF / DMARC / DKIM)");
    let _ = writeln!(out, "{heavy}");

    for res in results {
        let _ = writeln!(out, "\nDomain: {}", res.domain);
        let _ = writeln!(out, "{light}");

        let _ = writeln!(out, "SPF Present:   {}", flag_label(res.spf_present));
        if res.spf_present {
            let _ = writeln!(out, "SPF Record:    {}", res.spf_record);
            let _ = writeln!(out, "SPF Assessment: {}", res.spf_assessment);
        } else {
            let _ = writeln!(out, "SPF Record:    (none)");
        }

        let _ = writeln!(out, "\nDMARC Present: {}", flag_label(res.dmarc_present));
        if res.dmarc_present {
            let _ = writeln!(out, "DMARC Record:  {}", res.dmarc_record);
            let _ = writeln!(out, "DMARC Policy:  {}", res.dmarc_policy);
            let _ = writeln!(out, "DMARC Assessment: {}", res.dmarc_assessment);
        } else {
            let _ = writeln!(out, "DMARC Record:  (none)");
        }

        if res.dkim_checked {
            let _ = writeln!(
                out,
                "\nDKIM Checked:  True (selector = {})",
                res.dkim_selector
            );
            if res.dkim_present {
                let _ = writeln!(out, "DKIM Record:   {}", res.dkim_record);
            } else {
                let _ = writeln!(
                    out,
                    "DKIM Record:   (no DKIM record found for this selector)"
                );
            }
        } else {
            let _ = writeln!(out, "\nDKIM Checked:  False (no selector provided)");
        }

        if !res.notes.is_empty() {
            let _ = writeln!(out, "\nNotes:         {}", res.notes);
        }
        let _ = writeln!(out, "{light}");
    }

    out
}
