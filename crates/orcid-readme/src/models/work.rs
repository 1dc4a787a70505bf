//! Work references and extracted publication rows.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::config::api;

/// ORCID put-code: the opaque identifier of one work within a record.
///
/// The API serves put-codes as JSON numbers, but user-edited or older
/// records sometimes carry them as strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PutCode(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPutCode {
    Number(u64),
    Text(String),
}

impl PutCode {
    /// Read a put-code from a JSON value; `None` for anything that is not a
    /// non-negative integer or a non-empty string.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match RawPutCode::deserialize(value).ok()? {
            RawPutCode::Number(n) => Some(Self(n.to_string())),
            RawPutCode::Text(s) => {
                let s = s.trim();
                (!s.is_empty()).then(|| Self(s.to_string()))
            }
        }
    }

    /// The put-code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for PutCode {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl fmt::Display for PutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One work listed in a record: its put-code plus the summary it was read
/// from, which backs up fields missing from the detailed document.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkReference<'a> {
    /// Put-code used to fetch the work detail.
    pub put_code: PutCode,

    /// Work summary (or the enclosing group when it has no summaries).
    pub summary: &'a Value,
}

/// Placeholder title for works without one.
pub const UNTITLED: &str = "(no title)";

/// One table row. Every field is always present; missing data is an empty
/// string (or [`UNTITLED`] for the title).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationRow {
    /// Work title.
    pub title: String,

    /// Contributor names joined with `", "`.
    pub authors: String,

    /// Journal or container title.
    pub venue: String,

    /// Publication year as written in the record.
    pub year: String,

    /// Bare DOI, e.g. `10.1234/example`.
    pub doi: String,

    /// Best URL for the work.
    pub link: String,
}

impl PublicationRow {
    /// Publication year as a number, if it parses.
    #[must_use]
    pub fn year_number(&self) -> Option<i32> {
        self.year.trim().parse().ok()
    }

    /// `https://doi.org/{doi}` when a DOI is present.
    #[must_use]
    pub fn doi_url(&self) -> Option<String> {
        (!self.doi.is_empty()).then(|| doi_url(&self.doi))
    }
}

impl Default for PublicationRow {
    fn default() -> Self {
        Self {
            title: UNTITLED.to_string(),
            authors: String::new(),
            venue: String::new(),
            year: String::new(),
            doi: String::new(),
            link: String::new(),
        }
    }
}

/// Resolver URL for a bare DOI.
#[must_use]
pub fn doi_url(doi: &str) -> String {
    format!("{}/{}", api::DOI_RESOLVER, doi)
}
