//! Questionnaire response ingestion.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use log::{debug, warn};

use crate::config::{
    MAX_QUESTION_ID, MAX_SCORE, MIN_QUESTION_ID, MIN_SCORE, QUESTION_ID_COLUMN, SCORE_COLUMN,
};
use crate::error_handling::ReadinessError;

/// Reads questionnaire responses from a CSV file.
///
/// The header must include `question_id` and `score`; other columns (for
/// example a free-text `notes` column) are ignored.
///
/// # Errors
///
/// - `InputNotFound` if the file does not exist
/// - `MissingColumns`, `InvalidRow`, `QuestionOutOfRange`, `ScoreOutOfRange`
///   or `NoResponses` for schema and range violations
pub fn read_responses(path: &Path) -> Result<BTreeMap<u8, u8>, ReadinessError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ReadinessError::InputNotFound(path.to_path_buf()),
        _ => ReadinessError::Io(e),
    })?;
    let responses = parse_responses(file)?;
    debug!(
        "Read {} response(s) from {}",
        responses.len(),
        path.display()
    );
    Ok(responses)
}

/// Parses questionnaire responses from any CSV source.
///
/// A repeated question id keeps the last score given for it.
pub fn parse_responses<R: Read>(source: R) -> Result<BTreeMap<u8, u8>, ReadinessError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let id_index = headers.iter().position(|h| h == QUESTION_ID_COLUMN);
    let score_index = headers.iter().position(|h| h == SCORE_COLUMN);
    let (Some(id_index), Some(score_index)) = (id_index, score_index) else {
        return Err(ReadinessError::MissingColumns {
            found: headers.iter().map(str::to_string).collect(),
        });
    };

    let mut scores = BTreeMap::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let raw_id = record.get(id_index).unwrap_or("");
        let raw_score = record.get(score_index).unwrap_or("");

        let (Ok(question_id), Ok(score)) = (raw_id.parse::<i64>(), raw_score.parse::<i64>())
        else {
            return Err(ReadinessError::InvalidRow {
                line,
                question_id: raw_id.to_string(),
                score: raw_score.to_string(),
            });
        };

        if question_id < i64::from(MIN_QUESTION_ID) || question_id > i64::from(MAX_QUESTION_ID) {
            return Err(ReadinessError::QuestionOutOfRange(question_id));
        }
        // Range checked above
        let question_id = question_id as u8;
        if score < i64::from(MIN_SCORE) || score > i64::from(MAX_SCORE) {
            return Err(ReadinessError::ScoreOutOfRange { question_id, score });
        }

        if let Some(previous) = scores.insert(question_id, score as u8) {
            warn!(
                "Question {question_id} answered more than once; replacing {previous} with {score}"
            );
        }
    }

    if scores.is_empty() {
        return Err(ReadinessError::NoResponses);
    }
    Ok(scores)
}
