//! Prelude module for the course importer
//!
//! This module re-exports commonly used types and functions for convenient import.

// Re-export core types
pub use scalar_core::prelude::*;

// Re-export the import pipeline
pub use crate::scalar::{
    CourseBuilder, ScalarRow, ScalarWorkbookParser, SheetGrid, SheetSource, WorkbookSource,
    load_course, load_course_with_config, parse_grid,
};

// Re-export configuration
pub use crate::config::{ImporterConfig, OutputFormat};
