//! RACI matrix generation.
//!
//! Loads roles and tasks from YAML, lays them out as a grid and writes a
//! colour-coded XLSX workbook.

mod matrix;
mod model;
mod workbook;

// Re-export public API
pub use matrix::{RaciCode, RaciMatrix, RaciRow};
pub use model::{load_definition, parse_definition, RaciDefinition, RaciTask};
pub use workbook::write_workbook;
