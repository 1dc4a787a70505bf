//! Data models for ORCID identifiers, works, and table rows.
//!
//! Records and work details stay as raw `serde_json::Value`; ORCID documents
//! are too irregular for fixed structs, so fields are read through
//! [`crate::extract::path`] instead.

mod identifier;
mod work;

pub use identifier::OrcidId;
pub use work::{PublicationRow, PutCode, UNTITLED, WorkReference, doi_url};
