//! Publication report pipeline.
//!
//! identifier → record → work references → per-work detail → row → markdown.
//!
//! A failed record fetch aborts the run. A failed work fetch becomes a
//! [`WorkOutcome::Skipped`] and the loop moves on.

use std::cmp::Reverse;
use std::path::Path;
use std::time::Duration;

use crate::client::OrcidClient;
use crate::config::{Config, RowOrder};
use crate::error::{ClientError, ReportError, ReportResult};
use crate::extract::{extract_row, work_references};
use crate::formatters::format_publications_markdown;
use crate::models::{OrcidId, PublicationRow, PutCode, WorkReference};

/// Result of processing one work reference.
#[derive(Debug)]
pub enum WorkOutcome {
    /// The work was fetched and extracted.
    Row(PublicationRow),
    /// The work could not be fetched and is left out of the table.
    Skipped(SkippedWork),
}

/// A work omitted from the report, with the reason.
#[derive(Debug)]
pub struct SkippedWork {
    /// Put-code of the omitted work.
    pub put_code: PutCode,
    /// Why the detail fetch failed.
    pub error: ClientError,
}

/// Rows gathered for one identifier.
#[derive(Debug)]
pub struct Report {
    /// Identifier the report was built for.
    pub orcid: OrcidId,
    /// Extracted rows, in output order.
    pub rows: Vec<PublicationRow>,
    /// Works that were skipped, in record order.
    pub skipped: Vec<SkippedWork>,
}

impl Report {
    /// Empty report for `orcid`.
    #[must_use]
    pub fn new(orcid: OrcidId) -> Self {
        Self { orcid, rows: Vec::new(), skipped: Vec::new() }
    }

    /// Record the outcome of one work.
    pub fn push(&mut self, outcome: WorkOutcome) {
        match outcome {
            WorkOutcome::Row(row) => self.rows.push(row),
            WorkOutcome::Skipped(skipped) => self.skipped.push(skipped),
        }
    }

    /// Reorder rows. Sorting by year is stable and puts rows without a
    /// numeric year last.
    pub fn sort(&mut self, order: RowOrder) {
        if order == RowOrder::YearDescending {
            self.rows.sort_by_key(|row| Reverse(row.year_number()));
        }
    }

    /// Render the markdown document.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        format_publications_markdown(&self.orcid, &self.rows)
    }

    /// Write the markdown document to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::FileWrite`] naming `path` if the write fails.
    pub fn write_to(&self, path: &Path) -> ReportResult<()> {
        std::fs::write(path, self.to_markdown()).map_err(|e| ReportError::file_write(path, e))
    }
}

/// Fetch and extract one work. Fetch failures are logged and returned as
/// [`WorkOutcome::Skipped`].
pub async fn fetch_work_outcome(
    client: &OrcidClient,
    orcid: &OrcidId,
    reference: &WorkReference<'_>,
) -> WorkOutcome {
    match client.fetch_work(orcid, &reference.put_code).await {
        Ok(detail) => WorkOutcome::Row(extract_row(&detail, reference.summary)),
        Err(error) => {
            tracing::warn!(
                put_code = %reference.put_code,
                status = ?error.status_code(),
                error = %error,
                "Failed to fetch work, skipping"
            );
            WorkOutcome::Skipped(SkippedWork { put_code: reference.put_code.clone(), error })
        }
    }
}

/// Build the report for `orcid`.
///
/// Works are fetched one at a time in record order, pausing
/// `config.request_delay` between requests (not after the last one).
///
/// # Errors
///
/// Returns [`ReportError::Record`] if the record itself cannot be fetched.
pub async fn build_report(
    client: &OrcidClient,
    orcid: &OrcidId,
    config: &Config,
) -> ReportResult<Report> {
    tracing::info!(orcid = %orcid, "Fetching ORCID record");

    let record = client.fetch_record(orcid).await.map_err(ReportError::Record)?;

    let mut report = Report::new(orcid.clone());
    let mut references = work_references(&record).peekable();

    while let Some(reference) = references.next() {
        tracing::debug!(put_code = %reference.put_code, "Fetching work");
        report.push(fetch_work_outcome(client, orcid, &reference).await);

        if references.peek().is_some() {
            throttle(config.request_delay).await;
        }
    }

    report.sort(config.row_order);

    tracing::info!(
        orcid = %orcid,
        publications = report.rows.len(),
        skipped = report.skipped.len(),
        "Collected publications"
    );

    Ok(report)
}

/// Build the report and write it to `config.output_path`.
///
/// # Errors
///
/// Returns error if the record fetch or the file write fails.
pub async fn generate(
    client: &OrcidClient,
    orcid: &OrcidId,
    config: &Config,
) -> ReportResult<Report> {
    let report = build_report(client, orcid, config).await?;
    report.write_to(&config.output_path)?;

    tracing::info!(
        path = %config.output_path.display(),
        publications = report.rows.len(),
        "Wrote publication table"
    );

    Ok(report)
}

async fn throttle(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
