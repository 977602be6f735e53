pub mod render;
pub mod sheet;

pub use render::{render_language, render_text, ScriptSupport};
pub use sheet::{DiaryRow, DiarySheet};
