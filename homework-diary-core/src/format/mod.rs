//! Homework activity sentence formatter.
//!
//! Turns the fields of one homework row into a single display-ready
//! sentence. The image renderer and the PDF renderer both call into this
//! module, so the same row reads identically in both outputs.
//!
//! Formatting is pure and infallible: absent fields shorten the sentence,
//! and when there is nothing to say the result is the placeholder `"—"`.

pub mod builder;
pub mod pack;

pub use builder::{collapse_periods, location_phrase};
pub use pack::{LanguagePack, LeadIn, Template, ENGLISH, HINDI, TELUGU};

use crate::domain::{detect_language, ActivityInput, Language};

/// Format a homework row in the language its subject calls for
pub fn format_homework_activity(input: &ActivityInput) -> String {
    let language = detect_language(&input.subject_name);
    tracing::trace!(subject = %input.subject_name, %language, "formatting homework activity");
    format_in(input, language)
}

/// Format a homework row with English vocabulary regardless of subject
///
/// Used by renderers that cannot draw the subject's script.
pub fn format_english(input: &ActivityInput) -> String {
    format_in(input, Language::English)
}

/// Format a homework row in an explicit language
pub fn format_in(input: &ActivityInput, language: Language) -> String {
    builder::build(input, LanguagePack::for_language(language))
}
