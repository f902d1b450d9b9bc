//! Error handling.
//!
//! Each tool owns one error enum:
//! - [`PostureError`]: per-domain failures in the email checker (reported, batch continues)
//! - [`ReadinessError`]: fatal input validation failures in the scorer
//! - [`RaciError`]: fatal input or write failures in the RACI generator
//!
//! DNS lookup failures have no variant: they degrade to empty results.

mod types;

// Re-export public API
pub use types::{InitializationError, PostureError, RaciError, ReadinessError};
