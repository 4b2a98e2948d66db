//! Formatter module for outputting reconciliation results
//!
//! This module provides different output formatters for change entries.
//! The default is the "console" format which prints one styled header and
//! one value line per entry; the "json" format emits a machine-readable
//! array instead.

mod console;
mod json;

pub use console::ConsoleFormatter;
pub use json::JsonFormatter;

use crate::types::ChangeEntry;

/// Trait for formatting reconciliation results
pub trait Formatter {
    /// Format the entries and return a string representation
    fn format(&self, entries: &[ChangeEntry]) -> Result<String, Box<dyn std::error::Error>>;
}

/// Factory function to create a formatter based on output format
pub fn create_formatter(format: crate::cli::OutputFormat) -> Box<dyn Formatter> {
    match format {
        crate::cli::OutputFormat::Console => Box::new(ConsoleFormatter::new()),
        crate::cli::OutputFormat::Json => Box::new(JsonFormatter::new()),
    }
}
