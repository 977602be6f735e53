pub mod application;
pub mod domain;
pub mod format;

pub use application::{render_language, render_text, DiaryRow, DiarySheet, ScriptSupport};
pub use domain::{
    detect_language, is_maths_subject, ActivityInput, ActivityKind, EntryError, HomeworkEntry,
    Language, Script,
};
pub use format::{format_english, format_homework_activity, format_in, LanguagePack};
