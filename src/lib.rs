//! ir_toolkit library: incident-response preparation tooling
//!
//! This library backs three independent command-line tools:
//!
//! - `email-posture-check`: looks up SPF, DMARC and (optionally) DKIM TXT
//!   records for a list of domains and produces a plain-language assessment.
//! - `score-ir-readiness`: scores a 34-question incident-response readiness
//!   questionnaire from CSV and renders a Markdown report.
//! - `build-raci`: turns a YAML RACI definition into a colour-coded XLSX matrix.
//!
//! # Example
//!
//! ```no_run
//! use ir_toolkit::dns::StaticTxtResolver;
//! use ir_toolkit::posture::check_domain;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = StaticTxtResolver::new()
//!     .with_record("example.com", "v=spf1 include:_spf.example.net -all");
//! let posture = check_domain(&resolver, "example.com", None).await?;
//! println!("{}: {}", posture.domain, posture.spf_assessment);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! DNS lookups against real nameservers require a Tokio runtime. The scorer
//! and the RACI generator are fully synchronous.

#![warn(missing_docs)]

pub mod config;
pub mod dns;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod posture;
pub mod raci;
pub mod readiness;

// Re-export public API
pub use config::{LogFormat, LogLevel};
pub use error_handling::{InitializationError, PostureError, RaciError, ReadinessError};
pub use posture::{check_domain, DomainEmailPosture};
pub use raci::{load_definition, write_workbook, RaciDefinition, RaciMatrix};
pub use readiness::{score_responses, Maturity, ReadinessReport};
