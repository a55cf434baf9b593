//! Integration tests for importer configuration files

mod helpers;

use helpers::scalar_test_generator::*;
use scalar_importer::config::{ImporterConfig, OutputFormat, load_config};
use scalar_importer::{CourseError, load_course_with_config};
use std::fs;
use tempfile::TempDir;

/// A full configuration file drives the import
#[test]
fn test_config_file_selects_sheet() {
    let temp_dir = TempDir::new().unwrap();
    let workbook = temp_dir.path().join("multi.xlsx");
    let config_path = temp_dir.path().join("scalar.yaml");
    create_multi_sheet_excel(&workbook, "Course Map").unwrap();
    fs::write(
        &config_path,
        "workbook:\n  sheet_name: ${SCALAR_CONFIG_TEST_SHEET:-Course Map}\n  max_data_rows: 100\noutput:\n  format: yaml\n",
    )
    .unwrap();

    let config = ImporterConfig::load(&config_path).unwrap();
    assert_eq!(config.workbook.sheet_name.as_deref(), Some("Course Map"));
    assert_eq!(config.workbook.max_data_rows, Some(100));
    assert_eq!(config.output.format, OutputFormat::Yaml);

    let course = load_course_with_config(&workbook, &config).unwrap();
    assert_eq!(course.title, "CourseX");
}

/// The row limit from a config file is enforced
#[test]
fn test_config_row_limit() {
    let temp_dir = TempDir::new().unwrap();
    let workbook = temp_dir.path().join("course.xlsx");
    let config_path = temp_dir.path().join("scalar.yaml");
    create_example_course_excel(&workbook).unwrap();
    fs::write(&config_path, "workbook:\n  max_data_rows: 1\n").unwrap();

    let config = ImporterConfig::load(&config_path).unwrap();
    let err = load_course_with_config(&workbook, &config).unwrap_err();
    assert!(matches!(err, CourseError::FormatError { .. }));
}

/// The generic loader deserializes any section on its own
#[test]
fn test_generic_loader() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("output.yaml");
    fs::write(&config_path, "format: ${SCALAR_CONFIG_TEST_FORMAT:-json}\npretty: false\n").unwrap();

    let output: scalar_importer::config::OutputConfig = load_config(&config_path).unwrap();
    assert_eq!(output.format, OutputFormat::Json);
    assert!(!output.pretty);
}
