//! Enumerate the works listed in an ORCID record.

use serde_json::Value;

use super::path::{lookup, lookup_array};
use crate::models::{PutCode, WorkReference};

/// Path from the record root to the list of work groups.
const GROUPS_PATH: &[&str] = &["activities-summary", "works", "group"];

/// Work references in the order their groups appear in `record`.
///
/// Only the first summary of each group is used. A group without summaries
/// may still carry its own `put-code`. Groups yielding no put-code are
/// skipped; a record with no work groups yields nothing.
pub fn work_references(record: &Value) -> impl Iterator<Item = WorkReference<'_>> {
    lookup_array(record, GROUPS_PATH).iter().enumerate().filter_map(|(index, group)| {
        let reference = group_reference(group);
        if reference.is_none() {
            tracing::debug!(group = index, "Work group has no put-code, skipping");
        }
        reference
    })
}

fn group_reference(group: &Value) -> Option<WorkReference<'_>> {
    let summary = lookup_array(group, &["work-summary"]).first().filter(|s| s.is_object());

    let from_summary = summary.and_then(|s| {
        let put_code = lookup(s, &["put-code"]).and_then(PutCode::from_value)?;
        Some(WorkReference { put_code, summary: s })
    });

    from_summary.or_else(|| {
        let put_code = lookup(group, &["put-code"]).and_then(PutCode::from_value)?;
        Some(WorkReference { put_code, summary: summary.unwrap_or(group) })
    })
}
