//! Questionnaire categories and maturity tiers.

use strum_macros::{Display, EnumIter};

/// A questionnaire section covering a contiguous block of question ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Section name as printed in reports
    pub name: &'static str,
    /// First question id in the section
    pub first: u8,
    /// Last question id in the section (inclusive)
    pub last: u8,
}

impl Category {
    /// Whether `question_id` belongs to this section.
    pub fn contains(&self, question_id: u8) -> bool {
        (self.first..=self.last).contains(&question_id)
    }
}

/// Questionnaire sections in report order.
pub const CATEGORIES: [Category; 7] = [
    Category {
        name: "Preparation & Governance",
        first: 1,
        last: 7,
    },
    Category {
        name: "Detection & Reporting",
        first: 8,
        last: 14,
    },
    Category {
        name: "Containment",
        first: 15,
        last: 18,
    },
    Category {
        name: "Eradication",
        first: 19,
        last: 22,
    },
    Category {
        name: "Recovery",
        first: 23,
        last: 27,
    },
    Category {
        name: "Lessons Learned",
        first: 28,
        last: 31,
    },
    Category {
        name: "Advanced Controls",
        first: 32,
        last: 34,
    },
];

/// Position in [`CATEGORIES`] of the section a question belongs to.
pub fn category_index(question_id: u8) -> Option<usize> {
    CATEGORIES.iter().position(|c| c.contains(question_id))
}

/// Maturity tier derived from the normalised 0–30 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Maturity {
    /// 0–10: ad-hoc response
    Initial,
    /// 11–18: some processes, mostly reactive
    Basic,
    /// 19–25: documented processes with regular checks
    Intermediate,
    /// 26–30: proactive and repeatable
    Advanced,
}

impl Maturity {
    /// Score range shown in the interpretation legend.
    pub fn range_label(&self) -> &'static str {
        match self {
            Maturity::Initial => "0–10",
            Maturity::Basic => "11–18",
            Maturity::Intermediate => "19–25",
            Maturity::Advanced => "26–30",
        }
    }

    /// One-line description shown in the interpretation legend.
    pub fn description(&self) -> &'static str {
        match self {
            Maturity::Initial => "Ad-hoc response, high risk of prolonged incidents.",
            Maturity::Basic => "Some processes exist, but response is mostly reactive.",
            Maturity::Intermediate => "Documented IR processes with regular checks.",
            Maturity::Advanced => "Proactive, repeatable incident response capability.",
        }
    }

    /// Recommended next steps for an organisation at this tier.
    pub fn next_steps(&self) -> [&'static str; 2] {
        match self {
            Maturity::Initial => [
                "Establish a basic Incident Response Plan and assign clear roles.",
                "Enable logging on key systems and train staff to report suspicious activity.",
            ],
            Maturity::Basic => [
                "Formalise incident procedures for containment, eradication, and recovery.",
                "Introduce regular mailbox rule checks, MFA enforcement, and basic monitoring.",
            ],
            Maturity::Intermediate => [
                "Conduct at least one annual tabletop exercise.",
                "Improve centralised logging and monitoring of privileged accounts.",
            ],
            Maturity::Advanced => [
                "Refine automation and orchestration where possible.",
                "Continuously review lessons learned and feed them into policy updates.",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_QUESTION_ID, MIN_QUESTION_ID};

    #[test]
    fn test_every_question_has_exactly_one_category() {
        for q in MIN_QUESTION_ID..=MAX_QUESTION_ID {
            let matches = CATEGORIES.iter().filter(|c| c.contains(q)).count();
            assert_eq!(matches, 1, "question {q} should map to one category");
        }
        assert!(category_index(0).is_none());
        assert!(category_index(35).is_none());
    }

    #[test]
    fn test_category_boundaries() {
        let name = |q: u8| category_index(q).map(|i| CATEGORIES[i].name);
        assert_eq!(name(7), Some("Preparation & Governance"));
        assert_eq!(name(8), Some("Detection & Reporting"));
        assert_eq!(name(18), Some("Containment"));
        assert_eq!(name(34), Some("Advanced Controls"));
    }

    #[test]
    fn test_maturity_display() {
        assert_eq!(Maturity::Initial.to_string(), "Initial");
        assert_eq!(Maturity::Intermediate.to_string(), "Intermediate");
    }
}
