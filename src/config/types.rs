//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! by the three binaries.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_RACI_OUTPUT, DNS_TIMEOUT_SECS};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Options for `email-posture-check`.
///
/// # Examples
///
/// ```bash
/// email-posture-check --domain example.com
/// email-posture-check --input domains.txt --output report.csv
/// email-posture-check --domain example.com --dkim-selector default
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "email-posture-check",
    about = "Check SPF/DMARC (and optional DKIM) posture for one or more domains."
)]
pub struct PostureOpt {
    /// Domain name to check (can be used multiple times)
    #[arg(short = 'd', long = "domain")]
    pub domains: Vec<String>,

    /// Path to a text file with one domain per line ('#' starts a comment)
    #[arg(short, long, value_parser)]
    pub input: Option<PathBuf>,

    /// Optional CSV file path to export results
    #[arg(short, long, value_parser)]
    pub output: Option<PathBuf>,

    /// Optional DKIM selector to check (e.g. 'default')
    #[arg(long)]
    pub dkim_selector: Option<String>,

    /// Per-query DNS timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    pub dns_timeout_secs: u64,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

/// Options for `score-ir-readiness`.
#[derive(Debug, Parser)]
#[command(
    name = "score-ir-readiness",
    about = "Score the SME incident-response readiness questionnaire."
)]
pub struct ReadinessOpt {
    /// Path to CSV file with columns: question_id,score
    #[arg(short, long, value_parser)]
    pub input: PathBuf,

    /// Optional path to save a Markdown report
    #[arg(short, long, value_parser)]
    pub output: Option<PathBuf>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

/// Options for `build-raci`.
#[derive(Debug, Parser)]
#[command(
    name = "build-raci",
    about = "Build a RACI matrix spreadsheet from a YAML definition."
)]
pub struct RaciOpt {
    /// Path to YAML file defining roles and tasks
    #[arg(short, long, value_parser)]
    pub input: PathBuf,

    /// Output Excel file path
    #[arg(short, long, value_parser, default_value = DEFAULT_RACI_OUTPUT)]
    pub output: PathBuf,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}
