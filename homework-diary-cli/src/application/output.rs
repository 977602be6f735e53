use homework_diary_core::DiarySheet;

use super::use_cases::FormattedEntry;
use crate::infrastructure::Result;

/// How results are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per row
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

pub fn render_entries(entries: &[FormattedEntry], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(entries)?),
        OutputFormat::Text => Ok(entries
            .iter()
            .map(|e| format!("{}\t{}", e.subject, e.text))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

pub fn render_sheet(sheet: &DiarySheet, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(sheet)?),
        OutputFormat::Text => {
            let mut lines = vec![format!("{} · {}", sheet.class, sheet.date)];
            if sheet.is_empty() {
                lines.push("—".to_string());
            }
            for row in &sheet.rows {
                let marker = if row.emphasized { "!" } else { " " };
                lines.push(format!("{} {:<16} {}", marker, row.subject, row.text));
            }
            Ok(lines.join("\n"))
        }
    }
}
