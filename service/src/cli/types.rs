//! CLI type definitions

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Scalar course importer command-line interface
#[derive(Parser, Debug)]
#[command(name = "scalar", version, about = "Scalar course workbook tools")]
pub struct ScalarCli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode - suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: ScalarCommand,
}

/// Scalar subcommands
#[derive(Subcommand, Debug)]
pub enum ScalarCommand {
    /// Import a workbook and write the course graph
    Import {
        /// Workbook file (xlsx, xlsm, xlsb, xls, ods)
        file: PathBuf,
        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Output format, overriding the configuration
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
        /// Importer configuration file (YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Worksheet to read instead of the first one
        #[arg(short, long)]
        sheet: Option<String>,
    },

    /// Print an outline of the imported course
    Summary {
        /// Workbook file (xlsx, xlsm, xlsb, xls, ods)
        file: PathBuf,
        /// Importer configuration file (YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Worksheet to read instead of the first one
        #[arg(short, long)]
        sheet: Option<String>,
    },
}
