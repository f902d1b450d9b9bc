//! Configuration constants.
//!
//! This module defines the constants shared by the three tools: DNS lookup
//! tuning, record prefixes, questionnaire bounds and default output paths.

// Network operation timeouts
/// DNS query timeout in seconds.
/// Most TXT lookups complete well under a second; 5s tolerates slow
/// authoritative servers without stalling a long domain list.
pub const DNS_TIMEOUT_SECS: u64 = 5;
/// Number of attempts per DNS query before the lookup is treated as empty.
pub const DNS_ATTEMPTS: usize = 2;

// Email authentication record markers
/// Prefix identifying an SPF record (compared case-insensitively).
pub const SPF_PREFIX: &str = "v=spf1";
/// Prefix identifying a DMARC record (compared case-insensitively).
pub const DMARC_PREFIX: &str = "v=dmarc1";
/// Version tag identifying a DKIM key record (compared case-insensitively).
pub const DKIM_VERSION_TAG: &str = "v=dkim1";
/// Label prepended to a domain to find its DMARC policy.
pub const DMARC_LABEL: &str = "_dmarc";
/// Label inserted between selector and domain for DKIM keys.
pub const DKIM_LABEL: &str = "_domainkey";

// Console report layout
/// Width of the banner rules in the posture report.
pub const REPORT_WIDTH: usize = 72;

// Readiness questionnaire bounds
/// Lowest valid question id.
pub const MIN_QUESTION_ID: u8 = 1;
/// Highest valid question id.
pub const MAX_QUESTION_ID: u8 = 34;
/// Lowest valid answer score ("not in place").
pub const MIN_SCORE: u8 = 0;
/// Highest valid answer score ("fully in place").
pub const MAX_SCORE: u8 = 3;
/// Scale the overall score is normalised to.
pub const NORMALIZED_SCALE: f64 = 30.0;
/// Required column holding the question id.
pub const QUESTION_ID_COLUMN: &str = "question_id";
/// Required column holding the answer score.
pub const SCORE_COLUMN: &str = "score";

// RACI workbook
/// Default XLSX output path for `build-raci`.
pub const DEFAULT_RACI_OUTPUT: &str = "RACI_Matrix_Generated.xlsx";
/// Worksheet name used for the generated matrix.
pub const RACI_SHEET_NAME: &str = "RACI Matrix";
/// Header of the first (task) column.
pub const RACI_TASK_HEADER: &str = "Task / Activity";
/// Extra characters added to the longest cell when sizing a column.
pub const COLUMN_WIDTH_PADDING: usize = 2;
