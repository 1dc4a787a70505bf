//! Defensive extraction from ORCID JSON documents.

mod fields;
pub mod path;
mod works;

pub use fields::{
    clean_text, extract_authors, extract_doi, extract_link, extract_row, extract_title,
    extract_venue, extract_year, normalize_doi,
};
pub use works::work_references;
