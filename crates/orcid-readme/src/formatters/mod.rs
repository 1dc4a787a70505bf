//! Output formatters.

mod markdown;

pub use markdown::{COLUMNS, escape_cell, format_header, format_publications_markdown, format_row};
