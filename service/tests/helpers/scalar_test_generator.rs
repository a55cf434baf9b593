//! Helper functions to generate Scalar format Excel files for testing

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

/// Standard Scalar template headers
pub const SCALAR_HEADERS: [&str; 6] = [
    "Course Name",
    "CLO",
    "Topic",
    "Subtopic",
    "Lesson Title",
    "Performance Criteria",
];

/// One worksheet row; `None` leaves the cell blank
pub type Row<'a> = Vec<Option<&'a str>>;

/// The three-row course used throughout the docs
pub fn example_rows() -> Vec<Row<'static>> {
    vec![
        vec![Some("CourseX"), Some("CLO1"), Some("T1"), Some("S1"), Some("L1"), Some("PC1")],
        vec![Some("CourseX"), Some("CLO1"), Some("T1"), Some("S1"), Some("L2"), Some("PC1")],
        vec![Some("CourseX"), Some("CLO2"), Some("T1"), Some("S2"), Some("L3"), None],
    ]
}

fn write_sheet(
    sheet: &mut Worksheet,
    headers: &[&str],
    rows: &[Row<'_>],
    first_col: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let header_format = Format::new().set_bold();
    for (col, header) in (first_col..).zip(headers) {
        sheet.write_with_format(0, col, *header, &header_format)?;
    }

    for (row_idx, row) in (1u32..).zip(rows) {
        for (col, cell) in (first_col..).zip(row) {
            if let Some(value) = cell {
                sheet.write(row_idx, col, *value)?;
            }
        }
    }
    Ok(())
}

/// Write a single-sheet Scalar workbook
pub fn create_scalar_workbook(
    path: &Path,
    headers: &[&str],
    rows: &[Row<'_>],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Course Map")?;
    write_sheet(sheet, headers, rows, 0)?;
    workbook.save(path)?;
    Ok(())
}

/// Write the example course with the standard headers
pub fn create_example_course_excel(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    create_scalar_workbook(path, &SCALAR_HEADERS, &example_rows())
}

/// Write a workbook whose table starts in column C, leaving A and B empty
pub fn create_offset_course_excel(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    write_sheet(sheet, &SCALAR_HEADERS, &example_rows(), 2)?;
    workbook.save(path)?;
    Ok(())
}

/// Write a workbook with a notes sheet first and the course on a second sheet
pub fn create_multi_sheet_excel(
    path: &Path,
    course_sheet: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut workbook = Workbook::new();

    let notes = workbook.add_worksheet();
    notes.set_name("Notes")?;
    notes.write(0, 0, "Prepared for the curriculum committee")?;

    let sheet = workbook.add_worksheet();
    sheet.set_name(course_sheet)?;
    write_sheet(sheet, &SCALAR_HEADERS, &example_rows(), 0)?;

    workbook.save(path)?;
    Ok(())
}

/// Write a course whose CLO and subtopic cells hold numbers, not text
pub fn create_numeric_cells_excel(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    write_sheet(sheet, &SCALAR_HEADERS, &[], 0)?;

    sheet.write(1, 0, "Statistics")?;
    sheet.write(1, 1, 1)?;
    sheet.write(1, 2, "Distributions")?;
    sheet.write(1, 3, 2.5)?;
    sheet.write(1, 4, "Normal curve")?;

    workbook.save(path)?;
    Ok(())
}
