//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use rollcall_extractor::{CleanedLines, ContactFormatter, ExtractionResult};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format extracted contacts.
    pub fn format_contacts(
        &self,
        result: &ExtractionResult,
        contacts: &ContactFormatter,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_contacts_json(result),
            OutputFormat::Table => self.format_contacts_table(result, contacts),
            OutputFormat::Csv => Ok(contacts.to_csv(&result.contacts).trim_end().to_string()),
            OutputFormat::Display => Ok(contacts.display(&result.contacts)),
            OutputFormat::Quiet => Ok(result
                .contacts
                .iter()
                .filter_map(|c| c.name())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format cleaned lines.
    pub fn format_lines(&self, cleaned: &CleanedLines) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "lines": cleaned.lines,
                    "input_line_count": cleaned.input_count,
                    "removed_count": cleaned.removed_count(),
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table
            | OutputFormat::Csv
            | OutputFormat::Quiet
            | OutputFormat::Display => {
                Ok(cleaned.lines.join("\n"))
            }
        }
    }

    /// Format contacts as JSON.
    fn format_contacts_json(&self, result: &ExtractionResult) -> Result<String> {
        let contacts: Vec<serde_json::Value> = result
            .contacts
            .iter()
            .map(|c| {
                serde_json::json!({
                    "name": c.name(),
                    "title": c.title(),
                    "email": c.email(),
                    "mobile": c.mobile(),
                    "direct": c.direct(),
                    "office": c.office(),
                })
            })
            .collect();

        let value = serde_json::json!({
            "cleaned_lines": result.cleaned_lines,
            "input_line_count": result.input_line_count,
            "removed_count": result.removed_count,
            "contacts": contacts,
        });
        Ok(serde_json::to_string_pretty(&value)?)
    }

    /// Format contacts as a table.
    fn format_contacts_table(
        &self,
        result: &ExtractionResult,
        contacts: &ContactFormatter,
    ) -> Result<String> {
        if result.contacts.is_empty() {
            return Ok(self.colorize("No contacts found.", "yellow"));
        }

        let columns = contacts.columns();
        let mut builder = Builder::default();
        builder.push_record(columns.iter().map(|c| c.header()));

        for record in &result.contacts {
            builder.push_record(columns.iter().map(|c| c.value(record)));
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
