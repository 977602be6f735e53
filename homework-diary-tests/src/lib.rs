use chrono::NaiveDate;
use cucumber::World;
use homework_diary_core::{ActivityInput, DiarySheet, HomeworkEntry, Language, ScriptSupport};

#[derive(Debug, World)]
pub struct DiaryWorld {
    /// Homework fields under construction (the system under test's input)
    pub input: ActivityInput,

    /// Last formatter output
    pub output: Option<String>,

    /// Last detected language
    pub language: Option<Language>,

    /// Entries recorded for the day
    pub entries: Vec<HomeworkEntry>,

    /// Diary date used by sheet scenarios
    pub date: NaiveDate,

    /// What the renderer can draw
    pub support: ScriptSupport,

    /// Last built diary sheet
    pub sheet: Option<DiarySheet>,
}

impl Default for DiaryWorld {
    fn default() -> Self {
        Self {
            input: ActivityInput::default(),
            output: None,
            language: None,
            entries: Vec::new(),
            date: NaiveDate::from_ymd_opt(2024, 6, 12).expect("valid date"),
            support: ScriptSupport::all(),
            sheet: None,
        }
    }
}

impl DiaryWorld {
    /// Store a formatter result
    pub fn record(&mut self, output: String) {
        self.output = Some(output);
    }

    /// Get the last output (panics if nothing was formatted)
    pub fn output(&self) -> &str {
        self.output.as_deref().expect("Nothing formatted yet")
    }

    /// Get the last sheet (panics if none was built)
    pub fn sheet(&self) -> &DiarySheet {
        self.sheet.as_ref().expect("No sheet built yet")
    }
}

/// Feature files write absent fields as "-"
pub fn optional(value: &str) -> Option<String> {
    match value {
        "-" => None,
        other => Some(other.to_string()),
    }
}
