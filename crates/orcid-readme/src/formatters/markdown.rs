//! Markdown table rendering.

use crate::models::{OrcidId, PublicationRow};

/// Column headers, in output order.
pub const COLUMNS: [&str; 6] = ["Title", "Authors", "Venue", "Year", "DOI", "Link"];

/// Render the full publication document for `orcid`.
///
/// Every line ends in `\n` and nothing follows the last table row.
#[must_use]
pub fn format_publications_markdown(orcid: &OrcidId, rows: &[PublicationRow]) -> String {
    let mut output = format_header(orcid);

    for row in rows {
        output.push_str(&format_row(row));
    }

    output
}

/// Heading, source line and the table header.
#[must_use]
pub fn format_header(orcid: &OrcidId) -> String {
    let mut output = format!("# Publications for ORCID {orcid}\n\n");
    output.push_str(&format!("Source: {}\n\n", orcid.profile_url()));
    output.push_str(&format!("| {} |\n", COLUMNS.join(" | ")));
    output.push_str(&format!("|{}\n", "---|".repeat(COLUMNS.len())));
    output
}

/// One table row, newline-terminated.
#[must_use]
pub fn format_row(row: &PublicationRow) -> String {
    let doi = row
        .doi_url()
        .map(|url| format!("[{}]({})", escape_cell(&row.doi), link_target(&url)))
        .unwrap_or_default();

    let link = if row.link.is_empty() {
        String::new()
    } else {
        format!("[link]({})", link_target(&row.link))
    };

    format!(
        "| {} | {} | {} | {} | {} | {} |\n",
        escape_cell(&row.title),
        escape_cell(&row.authors),
        escape_cell(&row.venue),
        escape_cell(&row.year),
        doi,
        link,
    )
}

/// Make text safe inside a table cell: pipes escaped, line breaks flattened.
#[must_use]
pub fn escape_cell(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.trim().chars() {
        match c {
            '|' => out.push_str("\\|"),
            '\r' | '\n' => out.push(' '),
            c => out.push(c),
        }
    }
    out
}

fn link_target(url: &str) -> String {
    escape_cell(url).replace(' ', "%20")
}
