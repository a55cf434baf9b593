//! Worksheet access for Scalar workbooks
//!
//! The importer only ever needs one sheet as a grid of raw cell values.
//! [`SheetSource`] is that seam: [`WorkbookSource`] reads it from a file via
//! `calamine`, and a [`SheetGrid`] can be handed in directly.

use calamine::{Data, Range, Reader, open_workbook_auto};
use scalar_core::error::{CourseError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::types::CellValue;

/// Raw cell grid of a single worksheet. Row 0 is the header row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetGrid {
    rows: Vec<Vec<CellValue>>,
}

impl SheetGrid {
    /// Create a grid from raw rows, header row first
    #[must_use]
    pub fn new(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }

    /// Create a grid from a header row and data rows
    #[must_use]
    pub fn with_header<S: AsRef<str>>(header: &[S], data: Vec<Vec<CellValue>>) -> Self {
        let mut rows = Vec::with_capacity(data.len() + 1);
        rows.push(
            header
                .iter()
                .map(|h| CellValue::from(h.as_ref()))
                .collect(),
        );
        rows.extend(data);
        Self { rows }
    }

    /// Header row rendered as text; empty for an empty sheet
    #[must_use]
    pub fn header(&self) -> Vec<String> {
        self.rows
            .first()
            .map(|row| row.iter().map(CellValue::as_header).collect())
            .unwrap_or_default()
    }

    /// Rows after the header
    #[must_use]
    pub fn data_rows(&self) -> &[Vec<CellValue>] {
        self.rows.get(1..).unwrap_or_default()
    }

    /// Total number of rows, header included
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Something that can yield a single worksheet grid
pub trait SheetSource {
    /// Read the worksheet
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying document cannot be read.
    fn read_grid(&mut self) -> Result<SheetGrid>;
}

impl SheetSource for SheetGrid {
    fn read_grid(&mut self) -> Result<SheetGrid> {
        Ok(std::mem::take(self))
    }
}

/// Spreadsheet file on disk (xlsx, xlsm, xlsb, xls, ods)
#[derive(Debug, Clone)]
pub struct WorkbookSource {
    path: PathBuf,
    sheet_name: Option<String>,
}

impl WorkbookSource {
    /// Read the first worksheet of the workbook at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sheet_name: None,
        }
    }

    /// Read the named worksheet instead of the first one
    #[must_use]
    pub fn with_sheet(mut self, sheet_name: Option<String>) -> Self {
        self.sheet_name = sheet_name;
        self
    }

    /// Workbook path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SheetSource for WorkbookSource {
    fn read_grid(&mut self) -> Result<SheetGrid> {
        if !self.path.exists() {
            return Err(CourseError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Workbook not found: {}", self.path.display()),
            )));
        }

        let mut workbook = open_workbook_auto(&self.path).map_err(|e| {
            CourseError::workbook(format!("Failed to open '{}': {e}", self.path.display()))
        })?;

        let range = match &self.sheet_name {
            Some(name) => workbook
                .worksheet_range(name)
                .map_err(|e| CourseError::workbook(format!("Failed to read sheet '{name}': {e}")))?,
            None => workbook
                .worksheet_range_at(0)
                .ok_or_else(|| CourseError::workbook("Workbook contains no worksheets"))?
                .map_err(|e| CourseError::workbook(format!("Failed to read first sheet: {e}")))?,
        };

        let grid = grid_from_range(&range);
        debug!(
            "Read {} rows from '{}'",
            grid.row_count(),
            self.path.display()
        );
        Ok(grid)
    }
}

/// Convert a calamine range into a grid anchored at cell A1.
///
/// calamine trims leading blank rows and columns from a range; they are
/// restored here so row 0 is always the sheet's first row.
fn grid_from_range(range: &Range<Data>) -> SheetGrid {
    let Some((start_row, start_col)) = range.start() else {
        return SheetGrid::default();
    };

    let mut rows: Vec<Vec<CellValue>> = (0..start_row).map(|_| Vec::new()).collect();
    for row in range.rows() {
        let mut cells = vec![CellValue::Empty; start_col as usize];
        cells.extend(row.iter().map(CellValue::from));
        rows.push(cells);
    }
    SheetGrid::new(rows)
}

impl From<&Data> for CellValue {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => Self::Empty,
            Data::String(s) => Self::String(s.clone()),
            Data::Int(i) => Self::Int(*i),
            Data::Float(f) => Self::Float(*f),
            Data::Bool(b) => Self::Bool(*b),
            Data::DateTime(dt) => Self::Other(format!("{dt:?}")),
            Data::DateTimeIso(dt) => Self::Other(dt.clone()),
            Data::DurationIso(d) => Self::Other(d.clone()),
            Data::Error(e) => Self::Other(format!("{e:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_header_and_data() {
        let grid = SheetGrid::with_header(
            &["Course Name", "CLO"],
            vec![vec![CellValue::from("X"), CellValue::from("CLO1")]],
        );
        assert_eq!(grid.header(), vec!["Course Name", "CLO"]);
        assert_eq!(grid.data_rows().len(), 1);
        assert_eq!(grid.row_count(), 2);
    }

    #[test]
    fn test_empty_grid() {
        let grid = SheetGrid::default();
        assert!(grid.header().is_empty());
        assert!(grid.data_rows().is_empty());
    }

    #[test]
    fn test_grid_as_source_is_consumed() {
        let mut grid = SheetGrid::with_header(&["CLO"], Vec::new());
        let read = grid.read_grid().unwrap();
        assert_eq!(read.row_count(), 1);
        assert_eq!(grid.row_count(), 0);
    }

    #[test]
    fn test_missing_workbook_is_io_error() {
        let mut source = WorkbookSource::new("/nonexistent/course.xlsx");
        let err = source.read_grid().unwrap_err();
        assert!(matches!(err, CourseError::IoError(_)));
    }

    #[test]
    fn test_data_conversion() {
        assert_eq!(CellValue::from(&Data::Int(3)), CellValue::Int(3));
        assert_eq!(
            CellValue::from(&Data::String(" a ".to_string())),
            CellValue::String(" a ".to_string())
        );
        assert_eq!(CellValue::from(&Data::Empty), CellValue::Empty);
    }
}
