//! Per-language vocabulary and sentence templates.
//!
//! Templates use two placeholders: `{loc}` for the location phrase and
//! `{activity}` for the raw activity type (generic shapes only). Adding a
//! language or an activity type is a table change here, nothing else.

use crate::domain::{ActivityKind, Language};

pub(crate) const LOCATION: &str = "{loc}";
pub(crate) const ACTIVITY: &str = "{activity}";

/// How the description is introduced after the sentence head
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadIn {
    /// "Question numbers: ..." style
    Questions,
    /// Description follows as its own sentence
    Plain,
}

/// Sentence skeleton for one activity kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    /// Head when a location phrase exists, contains `{loc}`
    pub located: &'static str,
    /// Head when there is no location phrase
    pub bare: &'static str,
    pub lead_in: LeadIn,
    /// Prefix the head with the language's test marker
    pub marked: bool,
}

impl Template {
    const fn questions(located: &'static str, bare: &'static str) -> Self {
        Self {
            located,
            bare,
            lead_in: LeadIn::Questions,
            marked: false,
        }
    }

    const fn plain(located: &'static str, bare: &'static str) -> Self {
        Self {
            located,
            bare,
            lead_in: LeadIn::Plain,
            marked: false,
        }
    }

    const fn marked(self) -> Self {
        Self {
            marked: true,
            ..self
        }
    }
}

/// Everything needed to render sentences in one language
#[derive(Debug)]
pub struct LanguagePack {
    pub language: Language,
    /// Label for maths subjects ("Chapter")
    pub chapter_word: &'static str,
    /// Label for every other subject ("Lesson")
    pub lesson_word: &'static str,
    pub page_word: &'static str,
    /// Joins the parts of the location phrase
    pub separator: &'static str,
    pub questions_lead_in: &'static str,
    pub plain_lead_in: &'static str,
    pub terminator: &'static str,
    pub test_marker: &'static str,
    /// Unknown activity with a location, contains `{activity}` and `{loc}`
    pub generic_located: &'static str,
    /// No activity type at all, only a location
    pub location_only: &'static str,
    pub placeholder: &'static str,
    /// Indexed by [`ActivityKind`] position in [`ActivityKind::ALL`]
    templates: [Template; 9],
}

impl LanguagePack {
    pub fn for_language(language: Language) -> &'static LanguagePack {
        match language {
            Language::English => &ENGLISH,
            Language::Telugu => &TELUGU,
            Language::Hindi => &HINDI,
        }
    }

    pub fn lesson_label(&self, is_maths: bool) -> &'static str {
        if is_maths {
            self.chapter_word
        } else {
            self.lesson_word
        }
    }

    pub fn template(&self, kind: ActivityKind) -> &Template {
        &self.templates[kind.index()]
    }

    pub fn lead_in(&self, lead_in: LeadIn) -> &'static str {
        match lead_in {
            LeadIn::Questions => self.questions_lead_in,
            LeadIn::Plain => self.plain_lead_in,
        }
    }
}

pub static ENGLISH: LanguagePack = LanguagePack {
    language: Language::English,
    chapter_word: "Chapter",
    lesson_word: "Lesson",
    page_word: "Page",
    separator: ", ",
    questions_lead_in: ". Question numbers: ",
    plain_lead_in: ". ",
    terminator: ".",
    test_marker: "[TEST]",
    generic_located: "{activity} from {loc}",
    location_only: "From {loc}",
    placeholder: "—",
    templates: [
        Template::questions("Complete the reading from {loc}", "Complete the reading"),
        Template::questions(
            "Complete the writing task from {loc}",
            "Complete the writing task",
        ),
        Template::questions("Read and write from {loc}", "Read and write"),
        Template::plain("Learn the content from {loc}", "Learn the content"),
        Template::plain("Prepare for the test from {loc}", "Prepare for the test").marked(),
        Template::plain("Complete the activity from {loc}", "Complete the activity"),
        Template::plain(
            "Complete the project work from {loc}",
            "Complete the project work",
        ),
        Template::plain("Revise from {loc}", "Revise"),
        Template::plain("Complete the given task from {loc}", "Complete the given task"),
    ],
};

pub static TELUGU: LanguagePack = LanguagePack {
    language: Language::Telugu,
    chapter_word: "అధ్యాయం",
    lesson_word: "పాఠం",
    page_word: "పేజీ",
    separator: ", ",
    questions_lead_in: ". ప్రశ్నలు: ",
    plain_lead_in: ". ",
    terminator: ".",
    test_marker: "[పరీక్ష]",
    generic_located: "{activity}: {loc}",
    location_only: "{loc}",
    placeholder: "—",
    templates: [
        Template::questions("పాఠ్యపుస్తకంలో {loc} చదవండి", "చదవండి"),
        Template::questions("{loc} రాయడం పూర్తి చేయండి", "రాయడం పూర్తి చేయండి"),
        Template::questions("{loc} చదివి రాయండి", "చదివి రాయండి"),
        Template::plain("{loc} నేర్చుకోండి", "నేర్చుకోండి"),
        Template::plain("{loc} పరీక్షకు సిద్ధం అవండి", "పరీక్షకు సిద్ధం అవండి").marked(),
        Template::plain("కృత్యం పూర్తి చేయండి: {loc}", "కృత్యం పూర్తి చేయండి"),
        Template::plain("ప్రాజెక్ట్ పని: {loc}", "ప్రాజెక్ట్ పూర్తి చేయండి"),
        Template::plain("{loc} రివైజ్ చేయండి", "రివైజ్ చేయండి"),
        Template::plain("పని పూర్తి చేయండి: {loc}", "పూర్తి చేయండి"),
    ],
};

pub static HINDI: LanguagePack = LanguagePack {
    language: Language::Hindi,
    chapter_word: "अध्याय",
    lesson_word: "पाठ",
    page_word: "पृष्ठ",
    separator: ", ",
    questions_lead_in: ". प्रश्न: ",
    plain_lead_in: ". ",
    terminator: ".",
    test_marker: "[परीक्षा]",
    generic_located: "{activity}: {loc}",
    location_only: "{loc}",
    placeholder: "—",
    templates: [
        Template::questions("पाठ्यपुस्तक में {loc} पढ़ें", "पढ़ें"),
        Template::questions("{loc} लिखने का कार्य पूरा करें", "लिखने का कार्य पूरा करें"),
        Template::questions("{loc} पढ़कर लिखें", "पढ़कर लिखें"),
        Template::plain("{loc} सीखें", "सीखें"),
        Template::plain("{loc} परीक्षा की तैयारी करें", "परीक्षा की तैयारी करें").marked(),
        Template::plain("गतिविधि पूरी करें: {loc}", "गतिविधि पूरी करें"),
        Template::plain("परियोजना कार्य: {loc}", "परियोजना पूरी करें"),
        Template::plain("{loc} दोहराएं", "दोहराएं"),
        Template::plain("दिया गया कार्य पूरा करें: {loc}", "पूरा करें"),
    ],
};
