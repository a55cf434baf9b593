//! Command-line front end for the course importer.

mod app;
mod types;

pub use app::{ScalarApp, render_course, render_summary};
pub use types::{ScalarCli, ScalarCommand};

/// Main entry point for the CLI
///
/// # Errors
/// Returns error if CLI execution fails or encounters invalid arguments.
pub fn run() -> anyhow::Result<()> {
    ScalarApp::from_args().run()
}
