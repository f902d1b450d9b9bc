//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources the
//! binaries need before doing any work:
//! - Logger (plain or JSON output)
//! - DNS resolver for the posture checker

mod logger;
mod resolver;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::init_resolver;
