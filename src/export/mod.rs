//! Export functionality for posture results.
//!
//! The readiness scorer and RACI generator own their output formats
//! (Markdown, XLSX); this module covers the tabular posture export.

mod csv;

pub use csv::{export_posture_csv, write_posture_csv};
