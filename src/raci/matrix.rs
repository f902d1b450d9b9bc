//! RACI matrix layout.
//!
//! Turns a [`RaciDefinition`] into the grid written to the spreadsheet: one
//! header row, one row per task, one column per role.

use log::warn;

use super::model::RaciDefinition;
use crate::config::{COLUMN_WIDTH_PADDING, RACI_TASK_HEADER};

/// A RACI assignment code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaciCode {
    /// R: does the work
    Responsible,
    /// A: owns the outcome
    Accountable,
    /// C: gives input
    Consulted,
    /// I: kept up to date
    Informed,
}

impl RaciCode {
    /// Parses a cell value; surrounding whitespace and case are ignored.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "R" => Some(RaciCode::Responsible),
            "A" => Some(RaciCode::Accountable),
            "C" => Some(RaciCode::Consulted),
            "I" => Some(RaciCode::Informed),
            _ => None,
        }
    }

    /// Cell fill colour as `0xRRGGBB`.
    pub fn fill_rgb(&self) -> u32 {
        match self {
            RaciCode::Responsible => 0xC6EFCE, // green
            RaciCode::Accountable => 0xFFC7CE, // red
            RaciCode::Consulted => 0xFFEB9C,   // yellow
            RaciCode::Informed => 0xD9E1F2,    // blue
        }
    }

    /// Whether the code is rendered in bold.
    pub fn is_bold(&self) -> bool {
        matches!(self, RaciCode::Responsible | RaciCode::Accountable)
    }
}

/// One matrix row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaciRow {
    /// Task name (first column)
    pub task: String,
    /// Task description, if any
    pub description: Option<String>,
    /// One value per role, in header order; empty when unassigned
    pub cells: Vec<String>,
}

/// The full grid: header plus task rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaciMatrix {
    /// `Task / Activity` followed by the role names
    pub header: Vec<String>,
    /// Task rows in definition order
    pub rows: Vec<RaciRow>,
}

impl RaciMatrix {
    /// Lays out a definition as a grid.
    ///
    /// A role missing from a task's assignments leaves that cell blank.
    /// Assignments to roles not listed in `roles` are dropped, and values
    /// other than R/A/C/I are kept as written; both are logged.
    pub fn from_definition(definition: &RaciDefinition) -> Self {
        let mut header = Vec::with_capacity(definition.roles.len() + 1);
        header.push(RACI_TASK_HEADER.to_string());
        header.extend(definition.roles.iter().cloned());

        let rows = definition
            .tasks
            .iter()
            .map(|task| {
                for role in task.assignments.keys() {
                    if !definition.roles.contains(role) {
                        warn!(
                            "Task '{}' assigns unknown role '{}'; ignoring",
                            task.name, role
                        );
                    }
                }

                let cells = definition
                    .roles
                    .iter()
                    .map(|role| {
                        let value = task.assignments.get(role).cloned().unwrap_or_default();
                        if !value.trim().is_empty() && RaciCode::parse(&value).is_none() {
                            warn!(
                                "Task '{}' has unrecognised code '{}' for role '{}'",
                                task.name, value, role
                            );
                        }
                        value
                    })
                    .collect();

                RaciRow {
                    task: task.name.clone(),
                    description: task.description.clone(),
                    cells,
                }
            })
            .collect();

        Self { header, rows }
    }

    /// Column widths sized to the longest text in each column plus padding.
    ///
    /// Lengths are counted in characters. Blank cells count as zero, so a
    /// column whose cells are all blank is sized by its header alone.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.header.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            let values = std::iter::once(&row.task).chain(row.cells.iter());
            for (width, value) in widths.iter_mut().zip(values) {
                *width = (*width).max(value.chars().count());
            }
        }
        widths
            .into_iter()
            .map(|w| w + COLUMN_WIDTH_PADDING)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raci::model::RaciTask;
    use std::collections::BTreeMap;

    fn task(name: &str, assignments: &[(&str, &str)]) -> RaciTask {
        RaciTask {
            name: name.to_string(),
            description: None,
            assignments: assignments
                .iter()
                .map(|(r, c)| (r.to_string(), c.to_string()))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn test_raci_code_parse() {
        assert_eq!(RaciCode::parse("R"), Some(RaciCode::Responsible));
        assert_eq!(RaciCode::parse(" a "), Some(RaciCode::Accountable));
        assert_eq!(RaciCode::parse("c"), Some(RaciCode::Consulted));
        assert_eq!(RaciCode::parse("I"), Some(RaciCode::Informed));
        assert_eq!(RaciCode::parse(""), None);
        assert_eq!(RaciCode::parse("R/A"), None);
    }

    #[test]
    fn test_raci_code_styles() {
        assert!(RaciCode::Responsible.is_bold());
        assert!(RaciCode::Accountable.is_bold());
        assert!(!RaciCode::Consulted.is_bold());
        assert_eq!(RaciCode::Informed.fill_rgb(), 0xD9E1F2);
    }

    #[test]
    fn test_unassigned_role_is_blank() {
        let definition = RaciDefinition {
            roles: vec!["IR Lead".to_string()],
            tasks: vec![task("Containment", &[])],
        };
        let matrix = RaciMatrix::from_definition(&definition);
        assert_eq!(matrix.header, vec!["Task / Activity", "IR Lead"]);
        assert_eq!(matrix.rows.len(), 1);
        assert_eq!(matrix.rows[0].task, "Containment");
        assert_eq!(matrix.rows[0].cells, vec![String::new()]);
    }

    #[test]
    fn test_cells_follow_role_order() {
        let definition = RaciDefinition {
            roles: vec!["MSP".to_string(), "DPO".to_string(), "IR Lead".to_string()],
            tasks: vec![task(
                "Notification",
                &[("IR Lead", "A"), ("DPO", "R"), ("Unknown", "C")],
            )],
        };
        let matrix = RaciMatrix::from_definition(&definition);
        assert_eq!(matrix.rows[0].cells, vec!["", "R", "A"]);
    }

    #[test]
    fn test_column_widths() {
        let definition = RaciDefinition {
            roles: vec!["IT".to_string(), "Communications Lead".to_string()],
            tasks: vec![task(
                "A considerably longer task name",
                &[("IT", "Responsible")],
            )],
        };
        let matrix = RaciMatrix::from_definition(&definition);
        assert_eq!(
            matrix.column_widths(),
            vec![
                "A considerably longer task name".len() + 2,
                "Responsible".len() + 2,
                "Communications Lead".len() + 2,
            ]
        );
    }

    #[test]
    fn test_column_widths_blank_column_uses_header() {
        let definition = RaciDefinition {
            roles: vec!["DPO".to_string()],
            tasks: vec![task("Containment", &[])],
        };
        let matrix = RaciMatrix::from_definition(&definition);
        assert_eq!(matrix.column_widths(), vec!["Containment".len() + 2, "DPO".len() + 2]);
    }
}
