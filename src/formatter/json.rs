use crate::formatter::Formatter;
use crate::types::ChangeEntry;

/// Formatter for the "json" output format
///
/// Emits the entries as a JSON array, one object per entry with an
/// "action" discriminator, the composite "key", and a "fields" mapping
/// where the action carries one.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Create a new JsonFormatter with pretty printing enabled
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Create a JsonFormatter with custom pretty printing setting
    #[allow(dead_code)]
    pub fn with_pretty(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, entries: &[ChangeEntry]) -> Result<String, Box<dyn std::error::Error>> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(entries)?)
        } else {
            Ok(serde_json::to_string(entries)?)
        }
    }
}
