use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::{detect_language, ActivityInput, Language, Script};
use crate::format::format_in;

/// Non-Latin scripts a renderer can draw
///
/// The client image renderer draws everything; the PDF renderer only what
/// its registered fonts cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScriptSupport {
    pub telugu: bool,
    pub devanagari: bool,
}

impl Default for ScriptSupport {
    fn default() -> Self {
        Self::all()
    }
}

impl ScriptSupport {
    pub fn all() -> Self {
        Self {
            telugu: true,
            devanagari: true,
        }
    }

    pub fn latin_only() -> Self {
        Self {
            telugu: false,
            devanagari: false,
        }
    }

    pub fn supports(&self, script: Script) -> bool {
        match script {
            Script::Latin => true,
            Script::Telugu => self.telugu,
            Script::Devanagari => self.devanagari,
        }
    }
}

/// Language a subject is actually rendered in, given what can be drawn
pub fn render_language(subject_name: &str, support: ScriptSupport) -> Language {
    let language = detect_language(subject_name);

    if support.supports(language.script()) {
        language
    } else {
        tracing::debug!(
            subject = %subject_name,
            %language,
            script = %language.script(),
            "script not renderable, falling back to English"
        );
        Language::English
    }
}

/// Sentence for a row, localized only when its script can be drawn
pub fn render_text(input: &ActivityInput, support: ScriptSupport) -> String {
    format_in(input, render_language(&input.subject_name, support))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{format_english, format_homework_activity};

    fn telugu_input() -> ActivityInput {
        ActivityInput::new("Writing", "Telugu")
            .with_chapter("2")
            .with_description("1-4")
    }

    #[test]
    fn test_latin_always_supported() {
        assert!(ScriptSupport::latin_only().supports(Script::Latin));
        assert!(!ScriptSupport::latin_only().supports(Script::Telugu));
        assert!(ScriptSupport::all().supports(Script::Devanagari));
    }

    #[test]
    fn test_render_language_follows_support() {
        let telugu_only = ScriptSupport {
            telugu: true,
            devanagari: false,
        };

        assert_eq!(render_language("Telugu", telugu_only), Language::Telugu);
        assert_eq!(render_language("Hindi", telugu_only), Language::English);
        assert_eq!(render_language("English", telugu_only), Language::English);
    }

    #[test]
    fn test_render_text_localized_with_fonts() {
        let input = telugu_input();
        assert_eq!(
            render_text(&input, ScriptSupport::all()),
            format_homework_activity(&input)
        );
    }

    #[test]
    fn test_render_text_english_without_fonts() {
        let input = telugu_input();
        assert_eq!(
            render_text(&input, ScriptSupport::latin_only()),
            format_english(&input)
        );
        assert_eq!(
            render_text(&input, ScriptSupport::latin_only()),
            "Complete the writing task from Lesson 2. Question numbers: 1-4."
        );
    }
}
