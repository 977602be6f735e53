use std::path::{Path, PathBuf};

use homework_diary_core::ScriptSupport;

/// Font file the PDF renderer registers for Telugu
pub const TELUGU_FONT: &str = "NotoSansTelugu-Regular.ttf";

/// Font file the PDF renderer registers for Hindi
pub const DEVANAGARI_FONT: &str = "NotoSansDevanagari-Regular.ttf";

/// How homework sentences are rendered
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Directory holding the non-Latin fonts. `None` means every script can
    /// be drawn (image renderer).
    pub fonts_dir: Option<PathBuf>,

    /// Force English sentences for every subject
    pub english_only: bool,
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fonts_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fonts_dir = Some(dir.into());
        self
    }

    pub fn english_only(mut self, english_only: bool) -> Self {
        self.english_only = english_only;
        self
    }

    /// Scripts that can be drawn with this configuration
    pub fn script_support(&self) -> ScriptSupport {
        if self.english_only {
            return ScriptSupport::latin_only();
        }

        match &self.fonts_dir {
            None => ScriptSupport::all(),
            Some(dir) => {
                let support = ScriptSupport {
                    telugu: font_present(dir, TELUGU_FONT),
                    devanagari: font_present(dir, DEVANAGARI_FONT),
                };
                tracing::debug!(
                    fonts_dir = %dir.display(),
                    telugu = support.telugu,
                    devanagari = support.devanagari,
                    "probed fonts"
                );
                support
            }
        }
    }
}

fn font_present(dir: &Path, file: &str) -> bool {
    dir.join(file).is_file()
}
