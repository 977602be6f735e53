use chrono::NaiveDate;
use homework_diary_core::{DiarySheet, HomeworkEntry, ScriptSupport};

use crate::infrastructure::error::{CliError, Result};

/// Build the diary sheet for one class and day
///
/// Without an explicit subject list, subjects appear in the order they
/// first occur in `entries`.
pub fn build_sheet(
    entries: &[HomeworkEntry],
    class: &str,
    date: NaiveDate,
    subjects: Option<&[String]>,
    support: ScriptSupport,
) -> Result<DiarySheet> {
    if class.trim().is_empty() {
        return Err(CliError::InvalidConfig("class cannot be empty".to_string()));
    }

    let sheet = match subjects {
        Some(subjects) => DiarySheet::build(class, date, subjects, entries, support),
        None => {
            let subjects = DiarySheet::subjects_in_order(entries);
            DiarySheet::build(class, date, &subjects, entries, support)
        }
    };

    if sheet.is_empty() {
        tracing::warn!(class = %class, %date, "no homework recorded");
    }

    Ok(sheet)
}
