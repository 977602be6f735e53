use homework_diary_core::{render_text, HomeworkEntry, ScriptSupport};
use serde::Serialize;

use crate::infrastructure::error::{CliError, Result};

/// A formatted homework entry, in input order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedEntry {
    pub index: usize,
    pub subject: String,
    pub text: String,
    /// Validation problem, if any. The entry is still formatted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem: Option<String>,
}

/// Format every entry
///
/// Invalid entries are logged and still formatted, unless `strict` is set,
/// in which case the first invalid entry aborts the batch.
pub fn format_entries(
    entries: &[HomeworkEntry],
    support: ScriptSupport,
    strict: bool,
) -> Result<Vec<FormattedEntry>> {
    let mut formatted = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        let problem = match entry.validate() {
            Ok(()) => None,
            Err(source) if strict => return Err(CliError::InvalidEntry { index, source }),
            Err(source) => {
                tracing::warn!(index, subject = %entry.subject_name, "{}", source);
                Some(source.to_string())
            }
        };

        formatted.push(FormattedEntry {
            index,
            subject: entry.subject_name.clone(),
            text: render_text(&entry.to_activity_input(), support),
            problem,
        });
    }

    tracing::info!(count = formatted.len(), "formatted homework entries");
    Ok(formatted)
}
