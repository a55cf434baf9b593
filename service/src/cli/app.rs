//! Scalar CLI application.

use super::types::{ScalarCli, ScalarCommand};
use crate::config::{ImporterConfig, OutputFormat};
use crate::scalar::load_course_with_config;
use anyhow::{Context, Result};
use clap::Parser;
use scalar_core::types::CourseMetadata;
use std::fmt::Write as FmtWrite;
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Main Scalar CLI application
pub struct ScalarApp {
    cli: ScalarCli,
}

impl ScalarApp {
    /// Create the application from command line arguments
    #[must_use]
    pub fn from_args() -> Self {
        Self {
            cli: ScalarCli::parse(),
        }
    }

    /// Create the application with an already parsed CLI
    #[must_use]
    pub fn new(cli: ScalarCli) -> Self {
        Self { cli }
    }

    /// Run the selected command
    ///
    /// # Errors
    ///
    /// Returns error if the configuration, workbook, or output cannot be
    /// processed.
    pub fn run(self) -> Result<()> {
        self.init_logging();

        match self.execute_command() {
            Ok(()) => {
                info!("Command completed successfully");
                Ok(())
            }
            Err(err) => {
                error!("Command failed: {err:#}");
                if !self.cli.quiet {
                    eprintln!("Error: {err:#}");
                }
                Err(err)
            }
        }
    }

    /// Configure tracing subscriber based on CLI flags; `RUST_LOG` wins
    fn init_logging(&self) {
        let level = if self.cli.quiet {
            "error"
        } else if self.cli.verbose {
            "debug"
        } else {
            "info"
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        // A subscriber may already be installed when embedded; keep it.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    }

    fn execute_command(&self) -> Result<()> {
        match &self.cli.command {
            ScalarCommand::Import {
                file,
                output,
                format,
                config,
                sheet,
            } => self.import_command(
                file,
                output.as_ref(),
                *format,
                config.as_deref(),
                sheet.as_deref(),
            ),
            ScalarCommand::Summary {
                file,
                config,
                sheet,
            } => self.summary_command(file, config.as_deref(), sheet.as_deref()),
        }
    }

    fn import_command(
        &self,
        file: &Path,
        output: Option<&PathBuf>,
        format: Option<OutputFormat>,
        config: Option<&Path>,
        sheet: Option<&str>,
    ) -> Result<()> {
        let config = resolve_config(config, sheet)?;
        let course = load_course_with_config(file, &config)
            .with_context(|| format!("Failed to import '{}'", file.display()))?;

        let format = format.unwrap_or(config.output.format);
        let rendered = render_course(&course, format, config.output.pretty)?;

        match output {
            Some(path) => {
                std::fs::write(path, rendered)
                    .with_context(|| format!("Failed to write '{}'", path.display()))?;
                if !self.cli.quiet {
                    eprintln!(
                        "Imported '{}' ({} lessons) to {}",
                        course.title,
                        course.lesson_count(),
                        path.display()
                    );
                }
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(rendered.as_bytes())
                    .context("Failed to write to stdout")?;
                if !rendered.ends_with('\n') {
                    writeln!(stdout).context("Failed to write to stdout")?;
                }
            }
        }
        Ok(())
    }

    fn summary_command(&self, file: &Path, config: Option<&Path>, sheet: Option<&str>) -> Result<()> {
        let config = resolve_config(config, sheet)?;
        let course = load_course_with_config(file, &config)
            .with_context(|| format!("Failed to import '{}'", file.display()))?;

        print!("{}", render_summary(&course));
        Ok(())
    }
}

/// Load the configuration file (or defaults) and apply the sheet override
fn resolve_config(path: Option<&Path>, sheet: Option<&str>) -> Result<ImporterConfig> {
    let mut config = match path {
        Some(path) => ImporterConfig::load(path)
            .with_context(|| format!("Failed to load config '{}'", path.display()))?,
        None => ImporterConfig::default(),
    };
    if let Some(sheet) = sheet {
        config.workbook.sheet_name = Some(sheet.to_string());
        config.validate()?;
    }
    Ok(config)
}

/// Serialize the course graph in the requested format
///
/// # Errors
///
/// Returns `CourseError::SerializationError` if serialization fails.
pub fn render_course(
    course: &CourseMetadata,
    format: OutputFormat,
    pretty: bool,
) -> scalar_core::error::Result<String> {
    let rendered = match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(course)?,
        OutputFormat::Json => serde_json::to_string(course)?,
        OutputFormat::Yaml => serde_yaml::to_string(course)?,
    };
    Ok(rendered)
}

/// Human-readable outline of the course
#[must_use]
pub fn render_summary(course: &CourseMetadata) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Course: {} ({})", course.title, course.course_id);
    let _ = writeln!(out, "CLOs: {}", course.clos.len());
    let _ = writeln!(
        out,
        "Performance criteria: {}",
        course.performance_criteria().len()
    );
    let _ = writeln!(out, "Lessons: {}", course.lesson_count());
    let _ = writeln!(out, "Topics: {}", course.topics.len());
    for topic in &course.topics {
        let _ = writeln!(
            out,
            "  {}. {} ({} subtopics, {} lessons)",
            topic.order,
            topic.title,
            topic.subtopics.len(),
            topic.lessons().count()
        );
        for subtopic in &topic.subtopics {
            let _ = writeln!(
                out,
                "     {}.{} {} ({} lessons)",
                topic.order,
                subtopic.order,
                subtopic.title,
                subtopic.lessons.len()
            );
        }
    }
    out
}
