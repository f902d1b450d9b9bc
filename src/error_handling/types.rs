//! Error type definitions.
//!
//! This module defines the error types for each tool plus the shared
//! initialization error.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Errors raised while checking a single domain's email posture.
///
/// DNS failures never surface here: lookups degrade to "no record found".
/// These errors abort one domain, not the batch.
#[derive(Error, Debug)]
pub enum PostureError {
    /// The domain is not a syntactically valid DNS name.
    #[error("invalid domain name '{domain}': {reason}")]
    InvalidDomain {
        /// The rejected domain as given
        domain: String,
        /// Why it was rejected
        reason: String,
    },

    /// The domain list file could not be read.
    #[error("failed to read domain list {}: {source}", .path.display())]
    DomainList {
        /// Path of the domain list
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while reading and scoring questionnaire responses.
///
/// Every variant is fatal for the run.
#[derive(Error, Debug)]
pub enum ReadinessError {
    /// The response file does not exist.
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The header row lacks `question_id` or `score`.
    #[error("Input CSV must contain columns: question_id, score. Found: [{}]", .found.join(", "))]
    MissingColumns {
        /// Header fields actually present
        found: Vec<String>,
    },

    /// A row's id or score is not an integer.
    #[error("Invalid data row {line}: question_id='{question_id}', score='{score}'")]
    InvalidRow {
        /// 1-based line number in the file
        line: u64,
        /// Raw question id text
        question_id: String,
        /// Raw score text
        score: String,
    },

    /// A question id outside 1–34.
    #[error("Question ID out of range (1–34): {0}")]
    QuestionOutOfRange(i64),

    /// A score outside 0–3.
    #[error("Score for Q{question_id} out of range (0–3): {score}")]
    ScoreOutOfRange {
        /// Question the score belongs to
        question_id: u8,
        /// Offending score
        score: i64,
    },

    /// The file holds a header but no responses.
    #[error("No responses found in the input file.")]
    NoResponses,

    /// CSV framing or I/O error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Failure writing the Markdown report.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while loading a RACI definition or writing the workbook.
///
/// Every variant is fatal for the run.
#[derive(Error, Debug)]
pub enum RaciError {
    /// The YAML file does not exist.
    #[error("input YAML not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The YAML file could not be read.
    #[error("failed to read YAML file: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid YAML.
    #[error("failed parsing YAML file: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// `roles` or `tasks` is absent.
    #[error("YAML must contain 'roles' and 'tasks' keys.")]
    MissingKeys,

    /// `roles` or `tasks` is present but not a sequence.
    #[error("'roles' must be a list and 'tasks' must be a list.")]
    NotLists,

    /// A task entry is not a mapping.
    #[error("task #{0} must be a mapping with 'name' and 'assignments'")]
    InvalidTask(usize),

    /// The workbook could not be built or saved.
    #[error("failed to write workbook: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readiness_error_messages() {
        assert_eq!(
            ReadinessError::QuestionOutOfRange(40).to_string(),
            "Question ID out of range (1–34): 40"
        );
        assert_eq!(
            ReadinessError::ScoreOutOfRange {
                question_id: 5,
                score: 4
            }
            .to_string(),
            "Score for Q5 out of range (0–3): 4"
        );
        let missing = ReadinessError::MissingColumns {
            found: vec!["id".to_string(), "value".to_string()],
        };
        assert_eq!(
            missing.to_string(),
            "Input CSV must contain columns: question_id, score. Found: [id, value]"
        );
    }

    #[test]
    fn test_raci_error_messages() {
        assert_eq!(
            RaciError::MissingKeys.to_string(),
            "YAML must contain 'roles' and 'tasks' keys."
        );
        assert_eq!(
            RaciError::InputNotFound(PathBuf::from("missing.yaml")).to_string(),
            "input YAML not found: missing.yaml"
        );
    }

    #[test]
    fn test_posture_error_message() {
        let err = PostureError::InvalidDomain {
            domain: "bad..example".to_string(),
            reason: "empty label".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid domain name 'bad..example': empty label"
        );
    }
}
