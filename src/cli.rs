//! CLI mode implementation
//!
//! Command-line interface over the suggestion manager: build a collection
//! from a data file and query it, or just validate the file.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// amp-suggest CLI
#[derive(Parser)]
#[command(name = "amp-suggest")]
#[command(about = "Keyword-suggestion index build and query utility", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output (no short flag to avoid conflicts)
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a collection from a data file and query it once
    Query(QueryArgs),
    /// Parse and validate a data file without querying
    Validate(ValidateArgs),
}

/// Query command arguments
#[derive(Parser, Debug)]
pub struct QueryArgs {
    /// Path to the suggestion data file (JSON array of records)
    #[arg(short = 'd', long)]
    pub data: PathBuf,

    /// Collection name, e.g. a locale/form-factor tag
    #[arg(short = 'n', long, default_value = "default")]
    pub name: String,

    /// Typed user input to resolve (case-insensitive prefix match)
    pub input: String,

    /// Emit results as JSON lines instead of text
    #[arg(long)]
    pub json: bool,
}

/// Validate command arguments
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to the suggestion data file (JSON array of records)
    #[arg(short = 'd', long)]
    pub data: PathBuf,
}
