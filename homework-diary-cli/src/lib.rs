pub mod application;
pub mod infrastructure;

pub use application::OutputFormat;
pub use infrastructure::{CliError, LogConfig, RenderConfig, Result};
