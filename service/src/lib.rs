//! # Scalar Course Importer
//!
//! Turns a Scalar course design workbook into a canonical, deduplicated
//! course graph: course, CLOs, topics, subtopics, lessons, and performance
//! criteria.
//!
//! ## Quick Start
//!
//! ```no_run
//! use scalar_importer::load_course;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let course = load_course("ux-101.xlsx")?;
//!
//!     println!("{} ({} CLOs)", course.title, course.clos.len());
//!     for topic in &course.topics {
//!         println!("{}. {}", topic.order, topic.title);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! The pipeline also runs over an in-memory grid, bypassing the workbook
//! reader:
//!
//! ```
//! use scalar_importer::scalar::{CellValue, SheetGrid, parse_grid};
//!
//! let grid = SheetGrid::with_header(
//!     &["Course Name", "CLO", "Topic", "Subtopic", "Lesson Title", "Performance Criteria"],
//!     vec![vec![
//!         CellValue::from("UX 101"),
//!         CellValue::from("Apply grids"),
//!         CellValue::from("Layout"),
//!         CellValue::from("Grids"),
//!         CellValue::from("Columns"),
//!         CellValue::from("Builds a 12-column grid"),
//!     ]],
//! );
//!
//! let course = parse_grid(&grid).unwrap();
//! assert_eq!(course.course_id, "course-ux-101");
//! assert_eq!(course.topics[0].subtopics[0].lessons[0].key, "lesson-columns");
//! ```
//!
//! ## Modules
//!
//! - [`scalar`]: header resolution, row normalization, graph building
//! - [`config`]: YAML configuration with environment substitution
//! - [`cli`]: the `scalar` command-line front end

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)] // CLO, XLSX, ODS are proper nouns

/// Scalar workbook import pipeline
pub mod scalar;

/// Importer configuration
pub mod config;

/// Command-line front end
pub mod cli;

/// Prelude module for convenient imports
pub mod prelude;

pub use config::{ImporterConfig, OutputFormat};
pub use scalar::{load_course, load_course_with_config, parse_grid};
pub use scalar_core::error::{CourseError, Result};
pub use scalar_core::types::CourseMetadata;
