use console::{style, StyledObject};
use std::fmt::Write;

use crate::formatter::Formatter;
use crate::types::{Action, ChangeEntry};

/// Formatter for the default console output
///
/// Each entry renders as a styled header line `*** ACTION / key ***`
/// followed by an indented value line. Additions are green, removals
/// magenta, modifications cyan; styling is dropped automatically when
/// stdout is not a terminal.
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for ConsoleFormatter {
    fn format(&self, entries: &[ChangeEntry]) -> Result<String, Box<dyn std::error::Error>> {
        let mut out = String::new();
        for entry in entries {
            writeln!(out, "{}", header(entry))?;
            writeln!(out, "  {}", values_line(entry))?;
        }
        Ok(out)
    }
}

fn header(entry: &ChangeEntry) -> StyledObject<String> {
    let text = format!("*** {} / {} ***", entry.action(), entry.key());
    match entry.action() {
        Action::Add => style(text).green(),
        Action::Remove => style(text).magenta(),
        Action::Modify => style(text).cyan(),
    }
}

fn values_line(entry: &ChangeEntry) -> String {
    match entry {
        ChangeEntry::Added { fields, .. } => {
            let pairs: Vec<String> = fields
                .iter()
                .map(|(column, value)| format!("{}=[{}]", column, value))
                .collect();
            pairs.join(",")
        }
        ChangeEntry::Removed { key } => format!("Key={}", key),
        ChangeEntry::Modified { fields, .. } => {
            let pairs: Vec<String> = fields
                .iter()
                .map(|(column, change)| format!("{}:[{}] -> [{}]", column, change.old, change.new))
                .collect();
            pairs.join(",")
        }
    }
}
