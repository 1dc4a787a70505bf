//! Field extraction from ORCID work documents.
//!
//! Each extractor reads the detailed work document first and falls back to
//! the work summary from the record where that makes sense. None of them
//! can fail: missing data becomes an empty string or a placeholder.

use serde_json::Value;

use super::path::{lookup, lookup_array, lookup_text};
use crate::models::{PublicationRow, UNTITLED, doi_url};

const TITLE: &[&str] = &["title", "title", "value"];
const JOURNAL_TITLE: &[&str] = &["journal-title", "value"];
const YEAR: &[&str] = &["publication-date", "year", "value"];
const EXTERNAL_IDS: &[&str] = &["external-ids", "external-id"];

/// Prefixes stripped from DOI values before use.
const DOI_PREFIXES: &[&str] =
    &["https://doi.org/", "http://doi.org/", "https://dx.doi.org/", "http://dx.doi.org/", "doi:"];

/// Build a table row from a work detail document and its record summary.
#[must_use]
pub fn extract_row(detail: &Value, summary: &Value) -> PublicationRow {
    let doi = extract_doi(detail);
    let link = extract_link(detail, &doi);

    PublicationRow {
        title: extract_title(detail, summary),
        authors: extract_authors(detail, summary),
        venue: extract_venue(detail, summary),
        year: extract_year(detail, summary),
        doi,
        link,
    }
}

/// Work title, or [`UNTITLED`].
#[must_use]
pub fn extract_title(detail: &Value, summary: &Value) -> String {
    lookup_text(detail, TITLE)
        .or_else(|| lookup_text(summary, TITLE))
        .map(|t| clean_text(&t))
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| UNTITLED.to_string())
}

/// Contributor credit names joined with `", "`.
///
/// Contributors without a credit name are skipped. When the detail lists
/// nobody, a plain `author` or `credit-name` on the summary is used.
#[must_use]
pub fn extract_authors(detail: &Value, summary: &Value) -> String {
    let names: Vec<String> = lookup_array(detail, &["contributors", "contributor"])
        .iter()
        .filter_map(|c| lookup_text(c, &["credit-name", "value"]))
        .map(|name| clean_text(&name))
        .filter(|name| !name.is_empty())
        .collect();

    if !names.is_empty() {
        return names.join(", ");
    }

    lookup(summary, &["author"])
        .or_else(|| lookup(summary, &["credit-name"]))
        .and_then(Value::as_str)
        .or_else(|| lookup(summary, &["credit-name", "value"]).and_then(Value::as_str))
        .map(clean_text)
        .unwrap_or_default()
}

/// Journal or container title.
#[must_use]
pub fn extract_venue(detail: &Value, summary: &Value) -> String {
    lookup_text(detail, JOURNAL_TITLE)
        .or_else(|| lookup_text(summary, JOURNAL_TITLE))
        .map(|v| clean_text(&v))
        .unwrap_or_default()
}

/// Publication year as a plain string.
#[must_use]
pub fn extract_year(detail: &Value, summary: &Value) -> String {
    lookup_text(detail, YEAR).or_else(|| lookup_text(summary, YEAR)).unwrap_or_default()
}

/// First external identifier of type `doi` (any case), normalized to a bare DOI.
#[must_use]
pub fn extract_doi(detail: &Value) -> String {
    lookup_array(detail, EXTERNAL_IDS)
        .iter()
        .filter(|id| {
            lookup_text(id, &["external-id-type"]).is_some_and(|t| t.eq_ignore_ascii_case("doi"))
        })
        .find_map(|id| lookup_text(id, &["external-id-value"]))
        .map(|doi| normalize_doi(&doi))
        .unwrap_or_default()
}

/// Best URL for the work: the DOI resolver link when a DOI is known, then
/// the work's own URL, then the first external identifier URL.
#[must_use]
pub fn extract_link(detail: &Value, doi: &str) -> String {
    if !doi.is_empty() {
        return doi_url(doi);
    }

    lookup_text(detail, &["url", "value"])
        .or_else(|| {
            lookup_array(detail, EXTERNAL_IDS)
                .iter()
                .find_map(|id| lookup_text(id, &["external-id-url", "value"]))
        })
        .unwrap_or_default()
}

/// Strip resolver prefixes and whitespace from a DOI.
#[must_use]
pub fn normalize_doi(raw: &str) -> String {
    let trimmed = raw.trim();
    DOI_PREFIXES
        .iter()
        .find_map(|prefix| {
            trimmed
                .get(..prefix.len())
                .filter(|head| head.eq_ignore_ascii_case(prefix))
                .map(|_| &trimmed[prefix.len()..])
        })
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}

/// Collapse line breaks to spaces and trim.
#[must_use]
pub fn clean_text(text: &str) -> String {
    text.replace(['\r', '\n'], " ").trim().to_string()
}
