//! # Scalar Course Core
//!
//! Core types for the Scalar course importer: the canonical course graph,
//! slug identities used to deduplicate entities, and the shared error type.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Core error types for course import operations
pub mod error;

/// Slug keys for course entities
pub mod slug;

/// Canonical course graph types
pub mod types;

pub use error::{CourseError, Result};
pub use slug::{EntityKind, slugify};
pub use types::{
    Clo, CourseMetadata, Lesson, PerformanceCriteria, SharedCriteria, Subtopic, Topic,
    UNTITLED_COURSE,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{CourseError, Result};
    pub use crate::slug::{EntityKind, slugify};
    pub use crate::types::{
        Clo, CourseMetadata, Lesson, PerformanceCriteria, SharedCriteria, Subtopic, Topic,
    };
}
