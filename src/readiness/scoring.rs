//! Category aggregation and overall scoring.

use std::collections::BTreeMap;

use crate::config::{MAX_QUESTION_ID, MAX_SCORE, MIN_QUESTION_ID, NORMALIZED_SCALE};

use super::categories::{category_index, Maturity, CATEGORIES};

/// Points scored in one questionnaire section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryScore {
    /// Section name
    pub name: &'static str,
    /// Points scored
    pub total: u32,
    /// Points available
    pub max_total: u32,
    /// Question ids in the section
    pub questions: Vec<u8>,
}

impl CategoryScore {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            total: 0,
            max_total: 0,
            questions: Vec::new(),
        }
    }

    /// Share of available points scored, rounded to one decimal place.
    pub fn percentage(&self) -> f64 {
        if self.max_total == 0 {
            return 0.0;
        }
        round1(f64::from(self.total) / f64::from(self.max_total) * 100.0)
    }
}

/// Overall score across all sections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverallScore {
    /// Points scored
    pub total: u32,
    /// Points available
    pub max_total: u32,
    /// Score on the 0–30 scale, rounded to one decimal place
    pub normalized: f64,
}

/// Aggregates responses into the fixed sections, in report order.
///
/// Every question counts towards its section's maximum; unanswered
/// questions score zero.
pub fn build_category_scores(responses: &BTreeMap<u8, u8>) -> Vec<CategoryScore> {
    let mut categories: Vec<CategoryScore> =
        CATEGORIES.iter().map(|c| CategoryScore::new(c.name)).collect();

    for question_id in MIN_QUESTION_ID..=MAX_QUESTION_ID {
        if let Some(index) = category_index(question_id) {
            let category = &mut categories[index];
            category.questions.push(question_id);
            category.max_total += u32::from(MAX_SCORE);
        }
    }

    for (&question_id, &score) in responses {
        if let Some(index) = category_index(question_id) {
            categories[index].total += u32::from(score);
        }
    }

    categories
}

/// Sums section scores and normalises to the 0–30 scale.
pub fn compute_overall_score(categories: &[CategoryScore]) -> OverallScore {
    let total: u32 = categories.iter().map(|c| c.total).sum();
    let max_total: u32 = categories.iter().map(|c| c.max_total).sum();
    if max_total == 0 {
        return OverallScore {
            total: 0,
            max_total: 0,
            normalized: 0.0,
        };
    }
    OverallScore {
        total,
        max_total,
        normalized: round1(f64::from(total) / f64::from(max_total) * NORMALIZED_SCALE),
    }
}

/// Buckets a normalised score into a maturity tier.
///
/// Boundaries are inclusive upper bounds: 10 is still Initial, 18 Basic,
/// 25 Intermediate.
pub fn classify_maturity(normalized: f64) -> Maturity {
    if normalized <= 10.0 {
        Maturity::Initial
    } else if normalized <= 18.0 {
        Maturity::Basic
    } else if normalized <= 25.0 {
        Maturity::Intermediate
    } else {
        Maturity::Advanced
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
