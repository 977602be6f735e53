pub mod output;
pub mod use_cases;

pub use output::{render_entries, render_sheet, OutputFormat};
pub use use_cases::{build_sheet, export_schemas, format_entries, FormattedEntry};
