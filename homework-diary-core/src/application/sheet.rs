use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::render::{render_language, ScriptSupport};
use crate::domain::{HomeworkEntry, Language};
use crate::format::format_in;

/// One subject row of a diary sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DiaryRow {
    /// Upper-cased subject name
    pub subject: String,
    pub text: String,
    /// Test rows are drawn bold and red
    pub emphasized: bool,
    pub language: Language,
}

/// The homework of one class for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DiarySheet {
    pub class: String,
    pub date: NaiveDate,
    pub rows: Vec<DiaryRow>,
}

impl DiarySheet {
    /// Build the rows for `class` on `date`, in `subjects` order
    ///
    /// Subjects without homework are left out; when a subject has several
    /// entries the first one wins.
    pub fn build<S: AsRef<str>>(
        class: &str,
        date: NaiveDate,
        subjects: &[S],
        entries: &[HomeworkEntry],
        support: ScriptSupport,
    ) -> Self {
        let class = class.trim();
        let day: Vec<&HomeworkEntry> = entries
            .iter()
            .filter(|e| e.date == date && e.class.trim() == class)
            .collect();

        for entry in &day {
            if !subjects
                .iter()
                .any(|s| same_subject(s.as_ref(), &entry.subject_name))
            {
                tracing::warn!(
                    subject = %entry.subject_name,
                    class = %class,
                    "homework entry for unlisted subject skipped"
                );
            }
        }

        let rows = subjects
            .iter()
            .filter_map(|subject| {
                day.iter()
                    .find(|e| same_subject(subject.as_ref(), &e.subject_name))
                    .map(|entry| Self::row(entry, support))
            })
            .collect::<Vec<_>>();

        tracing::debug!(class = %class, %date, rows = rows.len(), "diary sheet built");

        Self {
            class: class.to_string(),
            date,
            rows,
        }
    }

    /// Subjects in order of first appearance
    pub fn subjects_in_order(entries: &[HomeworkEntry]) -> Vec<String> {
        let mut subjects: Vec<String> = Vec::new();
        for entry in entries {
            let name = entry.subject_name.trim();
            if !name.is_empty() && !subjects.iter().any(|s| same_subject(s, name)) {
                subjects.push(name.to_string());
            }
        }
        subjects
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    fn row(entry: &HomeworkEntry, support: ScriptSupport) -> DiaryRow {
        let language = render_language(&entry.subject_name, support);
        DiaryRow {
            subject: entry.subject_name.trim().to_uppercase(),
            text: format_in(&entry.to_activity_input(), language),
            emphasized: entry.is_test(),
            language,
        }
    }
}

fn same_subject(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}
