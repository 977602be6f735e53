use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::activity::ActivityInput;

/// Source the data-entry form fills in when a teacher leaves it untouched
pub const DEFAULT_SOURCE: &str = "Textbook";

/// One homework entry as recorded by a teacher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HomeworkEntry {
    /// Class the homework is for (e.g. "10th", "UKG")
    pub class: String,

    /// Diary date (YYYY-MM-DD)
    pub date: NaiveDate,

    pub subject_name: String,

    #[serde(default)]
    pub teacher_name: Option<String>,

    /// Free-text activity type (Reading, Writing, ...)
    pub activity_type: String,

    #[serde(default = "default_source")]
    pub source: Option<String>,

    #[serde(default)]
    pub chapter: Option<String>,

    #[serde(default)]
    pub page: Option<String>,

    #[serde(default)]
    pub description: String,
}

/// Data-entry validation failures
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum EntryError {
    #[error("Class cannot be empty")]
    EmptyClass,

    #[error("Subject name cannot be empty")]
    EmptySubject,

    #[error("Activity type cannot be empty")]
    EmptyActivityType,

    #[error("Description cannot be empty")]
    EmptyDescription,
}

fn default_source() -> Option<String> {
    Some(DEFAULT_SOURCE.to_string())
}

impl HomeworkEntry {
    /// Create an entry with the form defaults (source = Textbook)
    pub fn new(
        class: impl Into<String>,
        date: NaiveDate,
        subject_name: impl Into<String>,
        activity_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            class: class.into(),
            date,
            subject_name: subject_name.into(),
            teacher_name: None,
            activity_type: activity_type.into(),
            source: default_source(),
            chapter: None,
            page: None,
            description: description.into(),
        }
    }

    pub fn with_teacher(mut self, teacher_name: impl Into<String>) -> Self {
        self.teacher_name = Some(teacher_name.into());
        self
    }

    pub fn with_source(mut self, source: Option<String>) -> Self {
        self.source = source;
        self
    }

    pub fn with_chapter(mut self, chapter: impl Into<String>) -> Self {
        self.chapter = Some(chapter.into());
        self
    }

    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    /// Fields the sentence formatter needs
    pub fn to_activity_input(&self) -> ActivityInput {
        ActivityInput {
            activity_type: self.activity_type.clone(),
            subject_name: self.subject_name.clone(),
            source: self.source.clone(),
            chapter: self.chapter.clone(),
            page: self.page.clone(),
            description: self.description.clone(),
        }
    }

    /// Data-entry rules. The formatter itself never requires these.
    pub fn validate(&self) -> Result<(), EntryError> {
        if self.class.trim().is_empty() {
            return Err(EntryError::EmptyClass);
        }
        if self.subject_name.trim().is_empty() {
            return Err(EntryError::EmptySubject);
        }
        if self.activity_type.trim().is_empty() {
            return Err(EntryError::EmptyActivityType);
        }
        if self.description.trim().is_empty() {
            return Err(EntryError::EmptyDescription);
        }
        Ok(())
    }

    /// Test rows are highlighted by both renderers
    pub fn is_test(&self) -> bool {
        self.activity_type.to_lowercase().contains("test")
    }
}
