use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Telugu-script name of the language
const TELUGU_NATIVE: &str = "తెలుగు";

/// Devanagari spellings of "Hindi" (anusvara and half-na forms)
const HINDI_NATIVE: [&str; 2] = ["हिंदी", "हिन्दी"];

/// Sentence language, chosen from the subject name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Telugu,
    Hindi,
}

/// Writing system a renderer needs glyphs for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Latin,
    Telugu,
    Devanagari,
}

impl Language {
    pub fn script(&self) -> Script {
        match self {
            Language::English => Script::Latin,
            Language::Telugu => Script::Telugu,
            Language::Hindi => Script::Devanagari,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::English => write!(f, "English"),
            Language::Telugu => write!(f, "Telugu"),
            Language::Hindi => write!(f, "Hindi"),
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Script::Latin => write!(f, "Latin"),
            Script::Telugu => write!(f, "Telugu"),
            Script::Devanagari => write!(f, "Devanagari"),
        }
    }
}

/// Pick the sentence language for a subject
///
/// Telugu wins over Hindi when a name matches both. Everything else,
/// including an empty name, is English.
pub fn detect_language(subject_name: &str) -> Language {
    let name = subject_name.to_lowercase();

    if name.contains("telugu") || name.contains(TELUGU_NATIVE) {
        Language::Telugu
    } else if name.contains("hindi") || HINDI_NATIVE.iter().any(|n| name.contains(n)) {
        Language::Hindi
    } else {
        Language::English
    }
}

/// Maths subjects say "Chapter", everything else says "Lesson"
pub fn is_maths_subject(subject_name: &str) -> bool {
    subject_name.to_lowercase().contains("math")
}
