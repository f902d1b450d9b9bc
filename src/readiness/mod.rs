//! Incident-response readiness scoring.
//!
//! Reads `question_id,score` answers to the 34-question SME readiness
//! questionnaire, aggregates them into seven fixed sections, normalises the
//! overall result to a 0–30 scale and buckets it into a [`Maturity`] tier.

mod categories;
mod input;
mod report;
mod scoring;

use std::collections::BTreeMap;
use std::path::Path;

use log::info;

use crate::error_handling::ReadinessError;

// Re-export public API
pub use categories::{category_index, Category, Maturity, CATEGORIES};
pub use input::{parse_responses, read_responses};
pub use report::{generate_markdown_report, render_summary};
pub use scoring::{
    build_category_scores, classify_maturity, compute_overall_score, CategoryScore, OverallScore,
};

/// Scored questionnaire, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadinessReport {
    /// Per-section scores in report order
    pub categories: Vec<CategoryScore>,
    /// Points scored
    pub total: u32,
    /// Points available
    pub max_total: u32,
    /// Score on the 0–30 scale
    pub normalized: f64,
    /// Maturity tier for `normalized`
    pub maturity: Maturity,
}

/// Scores a set of validated responses.
pub fn score_responses(responses: &BTreeMap<u8, u8>) -> ReadinessReport {
    let categories = build_category_scores(responses);
    let overall = compute_overall_score(&categories);
    let maturity = classify_maturity(overall.normalized);
    info!(
        "Scored {} response(s): {:.1}/30 ({maturity})",
        responses.len(),
        overall.normalized
    );
    ReadinessReport {
        categories,
        total: overall.total,
        max_total: overall.max_total,
        normalized: overall.normalized,
        maturity,
    }
}

/// Writes the Markdown report for `report` to `path`.
///
/// # Errors
///
/// Returns `ReadinessError::Io` if the file cannot be written.
pub fn write_markdown_report(report: &ReadinessReport, path: &Path) -> Result<(), ReadinessError> {
    std::fs::write(path, generate_markdown_report(report))?;
    info!("Markdown report written to {}", path.display());
    Ok(())
}
