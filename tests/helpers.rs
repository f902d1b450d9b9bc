// Shared test helpers for writing fixture files.

use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes `contents` to `name` inside `dir` and returns the full path.
#[allow(dead_code)] // Used by other test files
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).expect("Failed to create fixture file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write fixture file");
    path
}

/// Builds a questionnaire CSV answering every question with `score`.
#[allow(dead_code)] // Used by other test files
pub fn uniform_responses(score: u8) -> String {
    let mut csv = String::from("question_id,score\n");
    for question in 1..=34 {
        csv.push_str(&format!("{question},{score}\n"));
    }
    csv
}

/// A small but complete RACI definition.
#[allow(dead_code)] // Used by other test files
pub const SAMPLE_RACI: &str = r#"
roles:
  - IR Lead
  - IT Team
  - MSP / IT Provider
  - DPO

tasks:
  - name: Incident Identification
    description: "Detect and recognise potential security incidents."
    assignments:
      IR Lead: R
      IT Team: C
      MSP / IT Provider: C
      DPO: I

  - name: Regulatory Notification
    assignments:
      IR Lead: A
      DPO: R
"#;
