// Output formatting for CLI

use std::io::Write;

use crate::cli::config::OutputFormat;

/// Format and output data
pub struct OutputFormatter {
    format: OutputFormat,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    /// Output one record (a JSON object) per file
    pub fn output_record(&self, record: &serde_json::Value, writer: &mut impl Write) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Pretty => {
                writeln!(writer, "{}", serde_json::to_string_pretty(record)?)?;
            }
            OutputFormat::Json => {
                writeln!(writer, "{}", serde_json::to_string(record)?)?;
            }
            OutputFormat::KeyValue => {
                self.output_key_value(record, "", writer)?;
                writeln!(writer)?;
            }
        }
        Ok(())
    }

    /// Output as key-value pairs, nested objects flattened with dots
    fn output_key_value(&self, value: &serde_json::Value, prefix: &str, writer: &mut impl Write) -> anyhow::Result<()> {
        if let Some(obj) = value.as_object() {
            let mut items: Vec<_> = obj.iter().collect();
            items.sort_by(|a, b| a.0.cmp(b.0));

            for (key, value) in items {
                let key = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                if value.is_object() {
                    self.output_key_value(value, &key, writer)?;
                } else {
                    writeln!(writer, "{}: {}", key, format_value(value))?;
                }
            }
        }
        Ok(())
    }

    /// Print error message
    pub fn print_error(&self, message: &str) {
        eprintln!("✗ {}", message);
    }

    /// Print info message
    pub fn print_info(&self, message: &str) {
        if !self.quiet {
            eprintln!("  {}", message);
        }
    }
}

/// Format a JSON value for display
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => "(null)".to_string(),
        other => other.to_string(),
    }
}
