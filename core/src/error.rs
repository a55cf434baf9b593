//! Error types for course import operations

use thiserror::Error;

/// Main error type for course import operations
#[derive(Error, Debug)]
pub enum CourseError {
    /// Document-level structural problems (no data rows, nothing usable)
    #[error("Malformed course workbook: {message}")]
    FormatError {
        /// Error message
        message: String,
    },

    /// Required headers could not be resolved
    #[error("Course workbook missing required headers: {}", .missing.join(", "))]
    SchemaError {
        /// Canonical names of the unresolved fields
        missing: Vec<String>,
    },

    /// A data row lacks one of the mandatory hierarchy fields
    #[error(
        "Each course row must include CLO, Topic, Subtopic, and Lesson Title{}. Got: {row}",
        .row_number.map(|n| format!(" (row {n})")).unwrap_or_default()
    )]
    IncompleteRowError {
        /// 1-based sheet row, when known
        row_number: Option<usize>,
        /// Rendered row content
        row: String,
    },

    /// Workbook could not be opened or decoded
    #[error("Failed to read workbook: {message}")]
    WorkbookError {
        /// Error message
        message: String,
    },

    /// IO errors
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type alias for course import operations
pub type Result<T> = std::result::Result<T, CourseError>;

impl CourseError {
    /// Create a new format error
    #[must_use]
    pub fn format(message: impl Into<String>) -> Self {
        Self::FormatError {
            message: message.into(),
        }
    }

    /// Create a schema error listing the unresolved fields
    #[must_use]
    pub fn missing_headers<I, S>(missing: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::SchemaError {
            missing: missing.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an incomplete row error
    #[must_use]
    pub fn incomplete_row(row: impl Into<String>) -> Self {
        Self::IncompleteRowError {
            row_number: None,
            row: row.into(),
        }
    }

    /// Attach the 1-based sheet row number to an incomplete row error.
    ///
    /// Other variants are returned unchanged.
    #[must_use]
    pub fn at_row(self, number: usize) -> Self {
        match self {
            Self::IncompleteRowError { row, .. } => Self::IncompleteRowError {
                row_number: Some(number),
                row,
            },
            other => other,
        }
    }

    /// Create a workbook error
    #[must_use]
    pub fn workbook(message: impl Into<String>) -> Self {
        Self::WorkbookError {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }

    /// Create a serialization error
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError(message.into())
    }
}

impl From<serde_json::Error> for CourseError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<serde_yaml::Error> for CourseError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
