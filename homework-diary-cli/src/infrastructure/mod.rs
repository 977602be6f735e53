pub mod error;
pub mod input;
pub mod observability;
pub mod render_config;

pub use error::{CliError, Result};
pub use input::load_entries;
pub use observability::LogConfig;
pub use render_config::{RenderConfig, DEVANAGARI_FONT, TELUGU_FONT};
