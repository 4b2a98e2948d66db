use clap::Parser;
use std::path::PathBuf;

use crate::error::RddError;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[value(name = "console")]
    Console, // Default: styled per-entry lines

    #[value(name = "json")]
    Json, // Machine-readable array of entries
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Console => write!(f, "console"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Command-line arguments for rdd
#[derive(Parser, Debug)]
#[command(name = "rdd")]
#[command(about = "Compare two JSON record sets by primary key")]
pub struct Args {
    /// Source JSON record set (the new state)
    pub source: PathBuf,

    /// Target JSON record set (the old state)
    pub target: PathBuf,

    /// Comma-separated primary-key columns, e.g. "id" or "region,id"
    pub key_columns: String,

    /// Comma-separated columns to exclude from comparison and reporting
    #[arg(required = false)]
    pub ignored_columns: Option<String>,

    /// Output format (default: console)
    #[arg(short, long, default_value_t = OutputFormat::Console, hide_default_value = true)]
    pub format: OutputFormat,
}

impl Args {
    /// Primary-key column names, split and trimmed
    pub fn key_columns(&self) -> Vec<String> {
        split_columns(&self.key_columns)
    }

    /// Ignored column names, split and trimmed (empty when not given)
    pub fn ignored_columns(&self) -> Vec<String> {
        self.ignored_columns
            .as_deref()
            .map(split_columns)
            .unwrap_or_default()
    }

    /// Validate command-line arguments
    pub fn validate(&self) -> Result<(), RddError> {
        if self.key_columns().is_empty() {
            return Err(RddError::InvalidArgs {
                message: "at least one primary-key column is required".to_string(),
            });
        }
        Ok(())
    }
}

fn split_columns(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|column| !column.is_empty())
        .map(str::to_string)
        .collect()
}
