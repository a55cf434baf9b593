//! Types and utilities for Scalar workbook processing

use scalar_core::error::{CourseError, Result};
use std::fmt;
use tracing::{debug, warn};

/// Canonical column of the Scalar template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CanonicalField {
    /// Course name
    CourseName,
    /// Course learning outcome
    Clo,
    /// Topic
    Topic,
    /// Subtopic
    Subtopic,
    /// Lesson title
    LessonTitle,
    /// Performance criteria
    PerformanceCriteria,
}

impl CanonicalField {
    /// All canonical fields in template order. Every one is required.
    pub const ALL: [Self; 6] = [
        Self::CourseName,
        Self::Clo,
        Self::Topic,
        Self::Subtopic,
        Self::LessonTitle,
        Self::PerformanceCriteria,
    ];

    /// Canonical field name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CourseName => "course_name",
            Self::Clo => "clo",
            Self::Topic => "topic",
            Self::Subtopic => "subtopic",
            Self::LessonTitle => "lesson_title",
            Self::PerformanceCriteria => "performance_criteria",
        }
    }

    /// Resolve a header alias. The header must already be trimmed and lower-cased.
    #[must_use]
    pub fn from_alias(header: &str) -> Option<Self> {
        match header {
            "course name" | "course title" => Some(Self::CourseName),
            "clo" | "clos" | "learning outcome" => Some(Self::Clo),
            "topic" | "topics" => Some(Self::Topic),
            "subtopic" | "sub-topics" => Some(Self::Subtopic),
            "lesson" | "lesson title" | "lessons" => Some(Self::LessonTitle),
            "performance criteria" | "pc" | "pcs" => Some(Self::PerformanceCriteria),
            _ => None,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Column header mappings, possibly incomplete
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMapping {
    columns: [Option<usize>; 6],
}

impl ColumnMapping {
    /// Create a new column mapping by analyzing the header row.
    ///
    /// Headers are trimmed and lower-cased before alias lookup. Blank and
    /// unrecognized headers are skipped; a later column wins when two
    /// headers resolve to the same field.
    #[must_use]
    pub fn from_headers<S: AsRef<str>>(headers: &[S]) -> Self {
        let mut mapping = Self::default();

        for (idx, header) in headers.iter().enumerate() {
            let header_lower = header.as_ref().trim().to_lowercase();
            if header_lower.is_empty() {
                continue;
            }

            match CanonicalField::from_alias(&header_lower) {
                Some(field) => {
                    if let Some(previous) = mapping.columns[field.index()] {
                        warn!(
                            "Header '{header_lower}' in column {idx} overrides column {previous} for {field}"
                        );
                    }
                    mapping.columns[field.index()] = Some(idx);
                }
                None => debug!("Ignoring unrecognized header '{header_lower}' in column {idx}"),
            }
        }

        mapping
    }

    /// Column index for a field, if resolved
    #[must_use]
    pub fn column(&self, field: CanonicalField) -> Option<usize> {
        self.columns[field.index()]
    }

    /// Fields with no resolved column, in template order
    #[must_use]
    pub fn missing(&self) -> Vec<CanonicalField> {
        CanonicalField::ALL
            .into_iter()
            .filter(|field| self.column(*field).is_none())
            .collect()
    }

    /// Require every canonical field to be resolved
    ///
    /// # Errors
    ///
    /// Returns `CourseError::SchemaError` naming every unresolved field.
    pub fn resolve(self) -> Result<HeaderMap> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(CourseError::missing_headers(
                missing.into_iter().map(CanonicalField::as_str),
            ));
        }

        let mut columns = [0; 6];
        for field in CanonicalField::ALL {
            if let Some(idx) = self.column(field) {
                columns[field.index()] = idx;
            }
        }
        Ok(HeaderMap { columns })
    }
}

/// Fully resolved mapping from canonical field to 0-based column index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderMap {
    columns: [usize; 6],
}

impl HeaderMap {
    /// Resolve the header row of a Scalar sheet
    ///
    /// # Errors
    ///
    /// Returns `CourseError::SchemaError` when a required header is missing.
    pub fn from_headers<S: AsRef<str>>(headers: &[S]) -> Result<Self> {
        ColumnMapping::from_headers(headers).resolve()
    }

    /// Column index for a field
    #[must_use]
    pub fn column(&self, field: CanonicalField) -> usize {
        self.columns[field.index()]
    }

    /// Iterate over `(field, column)` pairs in template order
    pub fn iter(&self) -> impl Iterator<Item = (CanonicalField, usize)> + '_ {
        CanonicalField::ALL
            .into_iter()
            .map(|field| (field, self.column(field)))
    }
}

/// Raw scalar value of a worksheet cell
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Blank cell
    #[default]
    Empty,
    /// Text cell
    String(String),
    /// Integer cell
    Int(i64),
    /// Floating point cell
    Float(f64),
    /// Boolean cell
    Bool(bool),
    /// Any other scalar (dates, durations, error codes), already rendered
    Other(String),
}

impl CellValue {
    /// Normalize the cell into an optional field value.
    ///
    /// Strings are trimmed and collapse to `None` when empty. Every other
    /// scalar is rendered as-is and is never considered empty.
    #[must_use]
    pub fn normalized(&self) -> Option<String> {
        match self {
            Self::Empty => None,
            Self::String(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Self::Int(i) => Some(i.to_string()),
            Self::Float(f) => Some(f.to_string()),
            Self::Bool(b) => Some(b.to_string()),
            Self::Other(s) => Some(s.clone()),
        }
    }

    /// Render the cell as header text
    #[must_use]
    pub fn as_header(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::String(s) | Self::Other(s) => s.clone(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Bool(b) => b.to_string(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

/// Normalized data row of a Scalar sheet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScalarRow {
    /// Course name
    pub course_name: Option<String>,
    /// Learning outcome text
    pub clo: Option<String>,
    /// Topic title
    pub topic: Option<String>,
    /// Subtopic title
    pub subtopic: Option<String>,
    /// Lesson title
    pub lesson_title: Option<String>,
    /// Performance criteria text
    pub performance_criteria: Option<String>,
}

impl ScalarRow {
    /// Normalize a raw data row.
    ///
    /// Returns `None` when every resolved field is empty or absent; cells
    /// past the end of a short row are absent.
    #[must_use]
    pub fn from_cells(cells: &[CellValue], headers: &HeaderMap) -> Option<Self> {
        let mut row = Self::default();
        let mut empty = true;

        for (field, idx) in headers.iter() {
            let value = cells.get(idx).and_then(CellValue::normalized);
            if value.is_some() {
                empty = false;
            }
            *row.field_mut(field) = value;
        }

        if empty { None } else { Some(row) }
    }

    /// Value of a canonical field
    #[must_use]
    pub fn get(&self, field: CanonicalField) -> Option<&str> {
        match field {
            CanonicalField::CourseName => self.course_name.as_deref(),
            CanonicalField::Clo => self.clo.as_deref(),
            CanonicalField::Topic => self.topic.as_deref(),
            CanonicalField::Subtopic => self.subtopic.as_deref(),
            CanonicalField::LessonTitle => self.lesson_title.as_deref(),
            CanonicalField::PerformanceCriteria => self.performance_criteria.as_deref(),
        }
    }

    fn field_mut(&mut self, field: CanonicalField) -> &mut Option<String> {
        match field {
            CanonicalField::CourseName => &mut self.course_name,
            CanonicalField::Clo => &mut self.clo,
            CanonicalField::Topic => &mut self.topic,
            CanonicalField::Subtopic => &mut self.subtopic,
            CanonicalField::LessonTitle => &mut self.lesson_title,
            CanonicalField::PerformanceCriteria => &mut self.performance_criteria,
        }
    }
}

impl fmt::Display for ScalarRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, field) in CanonicalField::ALL.into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match self.get(field) {
                Some(value) => write!(f, "{field}: {value:?}")?,
                None => write!(f, "{field}: None")?,
            }
        }
        f.write_str("}")
    }
}
