//! Formatting of the final selection for stdout

use serde_json::Value;

use crate::config::OutputFormat;

/// Render `selected` in the requested format.
///
/// `Lines` puts one item per line (empty string for no selection); `Json`
/// always produces an array.
pub fn format_selection(selected: &[String], format: OutputFormat) -> String {
    match format {
        OutputFormat::Lines => selected.join("\n"),
        OutputFormat::Json => Value::from(selected.to_vec()).to_string(),
    }
}
