//! Scalar workbook parser
//!
//! Runs the import pipeline over one worksheet: resolve the header row,
//! normalize data rows lazily (dropping blank ones), and fold every
//! remaining row into a fresh [`CourseBuilder`].

use super::builder::CourseBuilder;
use super::reader::{SheetGrid, SheetSource, WorkbookSource};
use super::types::{CellValue, HeaderMap, ScalarRow};
use crate::config::WorkbookConfig;
use scalar_core::error::{CourseError, Result};
use scalar_core::types::CourseMetadata;
use std::path::Path;
use tracing::{info, trace};

/// Parser for Scalar course design workbooks
#[derive(Debug, Clone, Default)]
pub struct ScalarWorkbookParser {
    config: WorkbookConfig,
}

impl ScalarWorkbookParser {
    /// Create a parser that reads the first worksheet
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with explicit workbook settings
    #[must_use]
    pub fn with_config(config: WorkbookConfig) -> Self {
        Self { config }
    }

    /// Parse a workbook file into the course graph
    ///
    /// The workbook is opened, read, and released within this call.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The file cannot be read or decoded
    /// - The sheet has no data rows, or only blank ones
    /// - A required header is missing
    /// - A data row lacks a mandatory field
    pub fn parse_file(&self, path: &Path) -> Result<CourseMetadata> {
        info!("Importing course workbook '{}'", path.display());
        let mut source = WorkbookSource::new(path).with_sheet(self.config.sheet_name.clone());
        self.parse_source(&mut source)
    }

    /// Parse whatever grid a [`SheetSource`] yields
    ///
    /// # Errors
    ///
    /// Propagates reader errors and every error of [`Self::parse_grid`].
    pub fn parse_source<S: SheetSource + ?Sized>(&self, source: &mut S) -> Result<CourseMetadata> {
        let grid = source.read_grid()?;
        self.parse_grid(&grid)
    }

    /// Parse an in-memory worksheet grid
    ///
    /// # Errors
    ///
    /// Returns `FormatError` for a sheet without data rows, a sheet whose
    /// rows are all blank, or one exceeding the configured row limit;
    /// `SchemaError` for missing headers; `IncompleteRowError` for the
    /// first row lacking a mandatory field.
    pub fn parse_grid(&self, grid: &SheetGrid) -> Result<CourseMetadata> {
        if grid.row_count() < 2 {
            return Err(CourseError::format("Scalar workbook does not contain any data rows"));
        }

        let data_rows = grid.data_rows();
        if let Some(max) = self.config.max_data_rows {
            if data_rows.len() > max {
                return Err(CourseError::format(format!(
                    "Scalar workbook has {} data rows, more than the configured limit of {max}",
                    data_rows.len()
                )));
            }
        }

        let headers = HeaderMap::from_headers(&grid.header())?;

        let mut builder = CourseBuilder::new();
        for (row_number, row) in normalized_rows(data_rows, &headers) {
            builder.ingest(&row).map_err(|e| e.at_row(row_number))?;
        }

        if builder.rows_ingested() == 0 {
            return Err(CourseError::format(
                "Scalar workbook has no usable rows: every row is empty after normalization",
            ));
        }

        Ok(builder.build())
    }
}

/// Lazily normalize data rows, skipping fully blank ones.
///
/// Yields each surviving row with its 1-based sheet row number (the header
/// is row 1, so the first data row is row 2).
pub fn normalized_rows<'a>(
    rows: &'a [Vec<CellValue>],
    headers: &'a HeaderMap,
) -> impl Iterator<Item = (usize, ScalarRow)> + 'a {
    rows.iter().enumerate().filter_map(move |(idx, cells)| {
        let row_number = idx + 2;
        let normalized = ScalarRow::from_cells(cells, headers);
        if normalized.is_none() {
            trace!("Skipping blank row {row_number}");
        }
        normalized.map(|row| (row_number, row))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADERS: [&str; 6] = [
        "Course Name",
        "CLO",
        "Topic",
        "Subtopic",
        "Lesson Title",
        "Performance Criteria",
    ];

    fn cells(values: &[Option<&str>]) -> Vec<CellValue> {
        values.iter().map(|v| CellValue::from(*v)).collect()
    }

    #[test]
    fn test_header_only_sheet_rejected() {
        let grid = SheetGrid::with_header(&HEADERS, Vec::new());
        let err = ScalarWorkbookParser::new().parse_grid(&grid).unwrap_err();
        assert!(matches!(err, CourseError::FormatError { .. }));
        assert!(err.to_string().contains("data rows"));
    }

    #[test]
    fn test_empty_sheet_rejected() {
        let err = ScalarWorkbookParser::new()
            .parse_grid(&SheetGrid::default())
            .unwrap_err();
        assert!(matches!(err, CourseError::FormatError { .. }));
    }

    #[test]
    fn test_all_blank_rows_rejected() {
        let grid = SheetGrid::with_header(
            &HEADERS,
            vec![cells(&[None, Some("  "), None]), Vec::new()],
        );
        let err = ScalarWorkbookParser::new().parse_grid(&grid).unwrap_err();
        assert!(matches!(err, CourseError::FormatError { .. }));
        assert!(err.to_string().contains("empty after normalization"));
    }

    #[test]
    fn test_missing_header_checked_before_rows() {
        let grid = SheetGrid::with_header(
            &HEADERS[..5],
            vec![cells(&[Some("C"), Some("CLO1"), Some("T"), Some("S"), Some("L")])],
        );
        let err = ScalarWorkbookParser::new().parse_grid(&grid).unwrap_err();
        match err {
            CourseError::SchemaError { missing } => assert_eq!(missing, vec!["performance_criteria"]),
            other => panic!("expected SchemaError, got {other:?}"),
        }
    }

    #[test]
    fn test_incomplete_row_carries_row_number() {
        let grid = SheetGrid::with_header(
            &HEADERS,
            vec![
                cells(&[Some("C"), Some("CLO1"), Some("T"), Some("S"), Some("L"), None]),
                cells(&[None; 6]),
                cells(&[Some("C"), Some("CLO1"), Some("T"), Some("S"), None, Some("PC")]),
            ],
        );
        let err = ScalarWorkbookParser::new().parse_grid(&grid).unwrap_err();
        match err {
            CourseError::IncompleteRowError { row_number, row } => {
                assert_eq!(row_number, Some(4));
                assert!(row.contains("lesson_title: None"));
            }
            other => panic!("expected IncompleteRowError, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_rows_are_skipped() {
        let grid = SheetGrid::with_header(
            &HEADERS,
            vec![
                cells(&[None; 6]),
                cells(&[Some("C"), Some("CLO1"), Some("T"), Some("S"), Some("L"), Some("PC")]),
                cells(&[Some(""), Some(" ")]),
            ],
        );
        let course = ScalarWorkbookParser::new().parse_grid(&grid).unwrap();
        assert_eq!(course.title, "C");
        assert_eq!(course.lesson_count(), 1);
    }

    #[test]
    fn test_row_limit() {
        let row = cells(&[Some("C"), Some("CLO1"), Some("T"), Some("S"), Some("L"), None]);
        let grid = SheetGrid::with_header(&HEADERS, vec![row.clone(), row.clone(), row]);

        let parser = ScalarWorkbookParser::with_config(WorkbookConfig {
            max_data_rows: Some(2),
            ..Default::default()
        });
        let err = parser.parse_grid(&grid).unwrap_err();
        assert!(matches!(err, CourseError::FormatError { .. }));

        let parser = ScalarWorkbookParser::with_config(WorkbookConfig {
            max_data_rows: Some(3),
            ..Default::default()
        });
        assert!(parser.parse_grid(&grid).is_ok());
    }

    #[test]
    fn test_normalized_rows_numbering() {
        let headers = HeaderMap::from_headers(&HEADERS).unwrap();
        let rows = vec![
            cells(&[Some("C"), Some("A")]),
            Vec::new(),
            cells(&[None, Some("B")]),
        ];
        let numbered: Vec<(usize, Option<String>)> = normalized_rows(&rows, &headers)
            .map(|(n, row)| (n, row.clo))
            .collect();
        assert_eq!(
            numbered,
            vec![(2, Some("A".to_string())), (4, Some("B".to_string()))]
        );
    }

    #[test]
    fn test_numeric_cells_pass_through() {
        let grid = SheetGrid::with_header(
            &HEADERS,
            vec![vec![
                CellValue::from("C"),
                CellValue::Int(1),
                CellValue::from("T"),
                CellValue::Float(1.5),
                CellValue::from("L"),
                CellValue::Empty,
            ]],
        );
        let course = ScalarWorkbookParser::new().parse_grid(&grid).unwrap();
        assert_eq!(course.clos[0].description, "1");
        assert_eq!(course.clos[0].key, "clo-1");
        assert_eq!(course.topics[0].subtopics[0].title, "1.5");
    }

    #[test]
    fn test_falsy_scalar_cells_are_values() {
        let grid = SheetGrid::with_header(
            &HEADERS,
            vec![vec![
                CellValue::from("C"),
                CellValue::Int(0),
                CellValue::from("T"),
                CellValue::Float(0.0),
                CellValue::from("L"),
                CellValue::Bool(false),
            ]],
        );
        let course = ScalarWorkbookParser::new().parse_grid(&grid).unwrap();
        assert_eq!(course.clos[0].key, "clo-0");
        assert_eq!(course.topics[0].subtopics[0].title, "0");

        let lesson = &course.topics[0].subtopics[0].lessons[0];
        assert_eq!(lesson.performance_criteria.len(), 1);
        assert_eq!(lesson.performance_criteria[0].description, "false");
    }
}
