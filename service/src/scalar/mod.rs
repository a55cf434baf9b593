//! Scalar course design workbook import
//!
//! The Scalar template is a column-oriented spreadsheet. Row 1 holds the
//! headers; every following row is one leaf relationship between a lesson
//! and (optionally) a performance criteria aligned to a CLO:
//!
//! ```text
//! | Course Name | CLO        | Topic  | Subtopic | Lesson Title | Performance Criteria |
//! |-------------|------------|--------|----------|--------------|----------------------|
//! | UX 101      | Apply grid | Layout | Grids    | Columns      | Builds a 12-col grid |
//! | UX 101      | Apply grid | Layout | Grids    | Gutters      | Builds a 12-col grid |
//! | UX 101      | Critique   | Layout | Review   | Peer review  |                      |
//! ```
//!
//! Header cells are matched case-insensitively against a fixed alias table
//! (`Course Title`, `CLOs`, `Learning Outcome`, `Topics`, `Sub-Topics`,
//! `Lesson`, `Lessons`, `PC`, `PCs`, ...). Repeated texts collapse onto a
//! single entity through their slug keys, so the import reconstructs the
//! course hierarchy rather than echoing rows.
//!
//! ## Modules
//!
//! - `types`: header aliases, column mapping, cell values, normalized rows
//! - `reader`: worksheet access (calamine) behind the `SheetSource` seam
//! - `builder`: incremental course graph construction
//! - `parser`: the end-to-end pipeline

pub mod builder;
pub mod parser;
pub mod reader;
pub mod types;

pub use builder::CourseBuilder;
pub use parser::{ScalarWorkbookParser, normalized_rows};
pub use reader::{SheetGrid, SheetSource, WorkbookSource};
pub use types::{CanonicalField, CellValue, ColumnMapping, HeaderMap, ScalarRow};

use crate::config::ImporterConfig;
use scalar_core::error::Result;
use scalar_core::types::CourseMetadata;
use std::path::Path;

/// Load a Scalar workbook into the canonical course graph, reading its
/// first worksheet.
///
/// # Errors
///
/// Returns `FormatError`, `SchemaError` or `IncompleteRowError` for
/// structural problems in the sheet, and `IoError` / `WorkbookError` when
/// the file cannot be read.
pub fn load_course(path: impl AsRef<Path>) -> Result<CourseMetadata> {
    ScalarWorkbookParser::new().parse_file(path.as_ref())
}

/// Load a Scalar workbook with explicit importer settings
///
/// # Errors
///
/// Same as [`load_course`].
pub fn load_course_with_config(
    path: impl AsRef<Path>,
    config: &ImporterConfig,
) -> Result<CourseMetadata> {
    ScalarWorkbookParser::with_config(config.workbook.clone()).parse_file(path.as_ref())
}

/// Run the import pipeline over an in-memory worksheet grid
///
/// # Errors
///
/// Same as [`load_course`], minus the reader errors.
pub fn parse_grid(grid: &SheetGrid) -> Result<CourseMetadata> {
    ScalarWorkbookParser::new().parse_grid(grid)
}
