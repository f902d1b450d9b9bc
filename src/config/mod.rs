//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (DNS timeouts, score bounds, default paths)
//! - CLI option types and parsing for each tool

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{LogFormat, LogLevel, PostureOpt, RaciOpt, ReadinessOpt};
