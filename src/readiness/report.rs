//! Console summary and Markdown report rendering.

use strum::IntoEnumIterator;

use super::categories::Maturity;
use super::ReadinessReport;

/// Renders the short console summary.
pub fn render_summary(report: &ReadinessReport) -> String {
    let mut lines: Vec<String> = vec![
        "=== Incident Response Readiness Score ===".to_string(),
        format!("Total score: {} / {}", report.total, report.max_total),
        format!("Normalised (0–30): {:.1}", report.normalized),
        format!("Maturity level: {}", report.maturity),
        String::new(),
        "Category breakdown:".to_string(),
    ];
    for cat in &report.categories {
        lines.push(format!(
            " - {}: {} / {} ({:.1}%)",
            cat.name,
            cat.total,
            cat.max_total,
            cat.percentage()
        ));
    }
    lines.join("\n") + "\n"
}

/// Renders the full Markdown report.
///
/// Sections: headline scores, category table, interpretation legend for all
/// four tiers, and next steps for the achieved tier.
pub fn generate_markdown_report(report: &ReadinessReport) -> String {
    let mut lines: Vec<String> = vec![
        "# Incident Response Readiness Report".to_string(),
        String::new(),
        format!("**Overall Score:** {} / {}", report.total, report.max_total),
        format!("**Normalised Score (0–30):** {:.1}", report.normalized),
        format!("**Maturity Level:** **{}**", report.maturity),
        String::new(),
        "## Category Breakdown".to_string(),
        String::new(),
        "| Category | Score | Max | % |".to_string(),
        "|----------|-------|-----|----|".to_string(),
    ];

    for cat in &report.categories {
        lines.push(format!(
            "| {} | {} | {} | {:.1}% |",
            cat.name,
            cat.total,
            cat.max_total,
            cat.percentage()
        ));
    }

    lines.push(String::new());
    lines.push("## Interpretation".to_string());
    lines.push(String::new());
    for tier in Maturity::iter() {
        lines.push(format!(
            "- **{} ({}):** {}",
            tier,
            tier.range_label(),
            tier.description()
        ));
    }

    lines.push(String::new());
    lines.push("## Suggested Next Steps".to_string());
    lines.push(String::new());
    for step in report.maturity.next_steps() {
        lines.push(format!("- {step}"));
    }

    lines.join("\n")
}
