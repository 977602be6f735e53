mod build_sheet;
mod export_schemas;
mod format_entries;

pub use build_sheet::build_sheet;
pub use export_schemas::export_schemas;
pub use format_entries::{format_entries, FormattedEntry};
