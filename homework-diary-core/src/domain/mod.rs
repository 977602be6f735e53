pub mod activity;
pub mod homework;
pub mod language;

pub use activity::{ActivityInput, ActivityKind};
pub use homework::{EntryError, HomeworkEntry, DEFAULT_SOURCE};
pub use language::{detect_language, is_maths_subject, Language, Script};
