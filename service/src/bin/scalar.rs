//! Scalar course importer command-line interface
//!
//! This binary provides the `scalar` command-line tool for importing course
//! design workbooks.

use scalar_importer::cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Errors are already reported by the app
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
