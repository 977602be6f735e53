use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Known homework activity types
///
/// Matching is trim + case-insensitive. Anything outside this vocabulary is
/// still formattable, it just takes the generic sentence shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityKind {
    Reading,
    Writing,
    ReadAndWrite,
    Learning,
    Test,
    Activity,
    Project,
    Revise,
    Complete,
}

impl ActivityKind {
    /// All kinds, in the order the data-entry form lists them
    pub const ALL: [ActivityKind; 9] = [
        ActivityKind::Reading,
        ActivityKind::Writing,
        ActivityKind::ReadAndWrite,
        ActivityKind::Learning,
        ActivityKind::Test,
        ActivityKind::Activity,
        ActivityKind::Project,
        ActivityKind::Revise,
        ActivityKind::Complete,
    ];

    /// Match a free-text activity type against the known vocabulary
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "reading" => Some(ActivityKind::Reading),
            "writing" => Some(ActivityKind::Writing),
            "read and write" => Some(ActivityKind::ReadAndWrite),
            "learning" => Some(ActivityKind::Learning),
            "test" => Some(ActivityKind::Test),
            "activity" => Some(ActivityKind::Activity),
            "project" => Some(ActivityKind::Project),
            "revise" => Some(ActivityKind::Revise),
            "complete" => Some(ActivityKind::Complete),
            _ => None,
        }
    }

    /// Canonical display label, as stored by the data-entry form
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Reading => "Reading",
            ActivityKind::Writing => "Writing",
            ActivityKind::ReadAndWrite => "Read and Write",
            ActivityKind::Learning => "Learning",
            ActivityKind::Test => "Test",
            ActivityKind::Activity => "Activity",
            ActivityKind::Project => "Project",
            ActivityKind::Revise => "Revise",
            ActivityKind::Complete => "Complete",
        }
    }

    /// Position in [`ActivityKind::ALL`], used to index template tables
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Homework fields consumed by the sentence formatter
///
/// Built fresh per row by the image and PDF renderers. Absent and empty
/// optional fields are treated the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityInput {
    /// Free-text activity type (e.g. "Reading")
    #[serde(default)]
    pub activity_type: String,

    /// Subject name, drives language selection
    #[serde(default)]
    pub subject_name: String,

    /// Where the content lives (e.g. "Textbook")
    #[serde(default)]
    pub source: Option<String>,

    #[serde(default)]
    pub chapter: Option<String>,

    #[serde(default)]
    pub page: Option<String>,

    /// Usually a list or range of question numbers
    #[serde(default)]
    pub description: String,
}

impl ActivityInput {
    pub fn new(activity_type: impl Into<String>, subject_name: impl Into<String>) -> Self {
        Self {
            activity_type: activity_type.into(),
            subject_name: subject_name.into(),
            ..Default::default()
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
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

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Known activity kind, if the activity type is in the vocabulary
    pub fn kind(&self) -> Option<ActivityKind> {
        ActivityKind::parse(&self.activity_type)
    }

    pub fn source(&self) -> Option<&str> {
        present(self.source.as_deref())
    }

    pub fn chapter(&self) -> Option<&str> {
        present(self.chapter.as_deref())
    }

    pub fn page(&self) -> Option<&str> {
        present(self.page.as_deref())
    }

    pub fn description(&self) -> Option<&str> {
        present(Some(&self.description))
    }
}

/// Trimmed value, or `None` when missing or blank
fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
